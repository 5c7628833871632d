// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    one        = { "1", true },
    yes        = { "yes", true },
    yes_upper  = { "YES", true },
    true_lower = { "true", true },
    true_mixed = { "True", true },
    zero       = { "0", false },
    no         = { "no", false },
    empty      = { "", false },
    garbage    = { "enable", false },
)]
fn boolish_parsing(input: &str, expected: bool) {
    assert_eq!(parse_boolish(input), Ok(expected));
}

#[test]
fn exit_error_displays_its_message() {
    let err = ExitError::fatal("cannot load certificate");
    assert_eq!(err.code, 1);
    assert_eq!(err.to_string(), "cannot load certificate");

    let err = ExitError::new(2, "bad flags");
    assert_eq!(err.code, 2);
}
