//! Unit tests for the CLI.


use clap::Parser;
use rstest::rstest;

use crate::Cli;

#[rstest]
#[case(&["watchgrid", "demo"])]
#[case(&["watchgrid", "demo", "--json"])]
#[case(&["watchgrid", "plan", "request.json"])]
#[case(&["watchgrid", "plan", "request.json", "--json"])]
fn accepts_valid_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args.iter().copied()).is_ok());
}

#[rstest]
#[case(&["watchgrid"])]
#[case(&["watchgrid", "plan"])]
#[case(&["watchgrid", "survey"])]
fn rejects_invalid_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args.iter().copied()).is_err());
}
