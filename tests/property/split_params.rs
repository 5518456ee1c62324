// tests/property/split_params.rs

use proptest::prelude::*;
use sfdxrun::exec::{build_args, split_params, username_from_params};

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9:@._/-]{1,12}"
}

proptest! {
    #[test]
    fn plain_tokens_survive_splitting(tokens in proptest::collection::vec(token(), 0..8)) {
        let params = tokens.join(" ");
        prop_assert_eq!(split_params(&params), tokens);
    }

    #[test]
    fn escaped_spaces_never_split(words in proptest::collection::vec(token(), 1..4)) {
        let escaped = words.join("\\ ");
        let params = format!("-n {escaped} -d force-app");

        let args = split_params(&params);
        prop_assert_eq!(args.len(), 4);
        prop_assert_eq!(&args[1], &words.join(" "));
    }

    #[test]
    fn build_args_always_frames_with_subcommand_and_json(params in "[ a-z\\\\-]{0,24}") {
        let args = build_args("force:org:list", &params);
        prop_assert_eq!(args.first().map(String::as_str), Some("force:org:list"));
        prop_assert_eq!(args.last().map(String::as_str), Some("--json"));
        prop_assert!(args.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn username_follows_u_flag(user in "[a-z]{1,8}@[a-z]{1,8}\\.com", rest in proptest::collection::vec(token(), 0..4)) {
        let params = format!("{} -u {user}", rest.join(" "));
        // A token from `rest` may itself be a username flag; skip those cases.
        prop_assume!(!rest.iter().any(|t| ["-u", "-o", "--targetusername", "--target-org"].contains(&t.as_str()) || t.contains('=')));
        prop_assert_eq!(username_from_params(&params), Some(user));
    }
}
