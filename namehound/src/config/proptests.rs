//! Property-based tests for the whole resolution pipeline.

use super::resolver::ConfigResolver;
use super::schema::{OptionValue, StaticConfig};
use crate::error::Error;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy for positional username tokens (never option-prefixed)
fn username_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.]{1,12}"
}

// Strategy for option keys that are never routed specially: the first
// letter range excludes help, unames, stdin, stdout, output_path, verbose,
// debug and plugin-config
fn passthrough_key_strategy() -> impl Strategy<Value = String> {
    "[a-c][a-z]{0,5}"
}

// Strategy for option keys that cannot be `help` but may hit routed fields
fn non_help_key_strategy() -> impl Strategy<Value = String> {
    "[a-g][a-z]{0,5}"
}

// Strategy for a token list with `-help` spliced in at an arbitrary spot
fn tokens_with_help_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(username_strategy(), 0..6)
        .prop_flat_map(|tokens| {
            let len = tokens.len();
            (Just(tokens), 0..=len)
        })
        .prop_map(|(mut tokens, index)| {
            tokens.insert(index, "-help".to_string());
            tokens
        })
}

fn base_with_stdout(format: &str) -> StaticConfig {
    let mut base = BTreeMap::new();
    base.insert(
        "stdout".to_string(),
        OptionValue::Text(format.to_string()),
    );
    StaticConfig {
        base: Some(base),
        plugins: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Option tokens never leak into the username list
    #[test]
    fn option_tokens_never_become_usernames(
        names in prop::collection::vec(username_strategy(), 1..5),
        keys in prop::collection::vec(non_help_key_strategy(), 0..4),
    ) {
        let mut args = Vec::new();
        for key in &keys {
            args.push(format!("-{key}"));
        }
        args.extend(names.clone());

        let resolution = ConfigResolver::new(args)
            .with_static_config(StaticConfig::default())
            .resolve()
            .unwrap();

        prop_assert_eq!(resolution.config.usernames, names);
    }

    // Command-line stdout always beats the static base entry
    #[test]
    fn cli_stdout_overrides_static(
        static_format in "[a-z]{1,8}",
        cli_format in "[a-z]{1,8}",
        name in username_strategy(),
    ) {
        let resolution = ConfigResolver::new([
            name,
            format!("-stdout:{cli_format}"),
        ])
        .with_static_config(base_with_stdout(&static_format))
        .resolve()
        .unwrap();

        prop_assert_eq!(resolution.config.output_format, cli_format);
    }

    // Without a command-line override the static base entry survives
    #[test]
    fn static_stdout_survives_without_cli_override(
        static_format in "[a-z]{1,8}",
        name in username_strategy(),
    ) {
        let resolution = ConfigResolver::new([name])
            .with_static_config(base_with_stdout(&static_format))
            .resolve()
            .unwrap();

        prop_assert_eq!(resolution.config.output_format, static_format);
    }

    // For repeated keys the rightmost token wins
    #[test]
    fn rightmost_token_wins(
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
        name in username_strategy(),
    ) {
        let resolution = ConfigResolver::new([
            name,
            format!("-stdout:{first}"),
            format!("-stdout:{second}"),
        ])
        .with_static_config(StaticConfig::default())
        .resolve()
        .unwrap();

        prop_assert_eq!(resolution.config.output_format, second);
    }

    // Unrecognized key:value options land in extras verbatim
    #[test]
    fn passthrough_options_land_in_extras(
        key in passthrough_key_strategy(),
        value in "[a-z0-9:/.]{0,12}",
        name in username_strategy(),
    ) {
        let resolution = ConfigResolver::new([
            name,
            format!("-{key}:{value}"),
        ])
        .with_static_config(StaticConfig::default())
        .resolve()
        .unwrap();

        prop_assert_eq!(
            resolution.config.extras.get(&key),
            Some(&OptionValue::Text(value))
        );
    }

    // A `unames` option can never alter the username list
    #[test]
    fn unames_option_never_alters_usernames(
        names in prop::collection::vec(username_strategy(), 1..5),
        value in "[a-z0-9,]{0,12}",
    ) {
        let mut args = names.clone();
        args.push(format!("-unames:{value}"));

        let resolution = ConfigResolver::new(args)
            .with_static_config(StaticConfig::default())
            .resolve()
            .unwrap();

        prop_assert_eq!(resolution.config.usernames, names);
        prop_assert!(!resolution.config.extras.contains_key("unames"));
    }

    // The inline plugin grammar parses to exactly the clause contents
    #[test]
    fn plugin_grammar_parses_exactly(
        plugin in "[a-z]{1,8}",
        settings in prop::collection::vec("[a-z0-9.]{1,6}", 1..=4),
        name in username_strategy(),
    ) {
        let resolution = ConfigResolver::new([
            name,
            format!("-plugin-config:{plugin}={}", settings.join(",")),
        ])
        .with_static_config(StaticConfig::default())
        .resolve()
        .unwrap();

        prop_assert_eq!(resolution.config.plugin_config.len(), 1);
        prop_assert_eq!(&resolution.config.plugin_config[&plugin], &settings);
    }

    // A static plugin section always replaces the inline list for its key
    #[test]
    fn static_plugins_replace_inline_lists(
        plugin in "[a-z]{1,8}",
        inline in prop::collection::vec("[a-z]{1,6}", 1..=4),
        pinned in prop::collection::vec("[a-z]{1,6}", 1..=4),
        name in username_strategy(),
    ) {
        let mut section = BTreeMap::new();
        section.insert(plugin.clone(), pinned.clone());
        let statics = StaticConfig {
            base: None,
            plugins: Some(section),
        };

        let resolution = ConfigResolver::new([
            name,
            format!("-plugin-config:{plugin}={}", inline.join(",")),
        ])
        .with_static_config(statics)
        .resolve()
        .unwrap();

        prop_assert_eq!(&resolution.config.plugin_config[&plugin], &pinned);
    }

    // `-help` anywhere in the token list short-circuits everything
    #[test]
    fn help_short_circuits_anywhere(args in tokens_with_help_strategy()) {
        let err = ConfigResolver::new(args)
            .with_static_config(StaticConfig::default())
            .resolve()
            .unwrap_err();

        prop_assert!(matches!(err, Error::HelpRequested));
    }

    // Options alone never satisfy the username requirement
    #[test]
    fn options_alone_fail_validation(
        keys in prop::collection::vec(non_help_key_strategy(), 1..5),
    ) {
        let args: Vec<String> = keys.iter().map(|key| format!("-{key}")).collect();

        let err = ConfigResolver::new(args)
            .with_static_config(StaticConfig::default())
            .resolve()
            .unwrap_err();

        prop_assert!(matches!(err, Error::NoUsernames));
    }
}
