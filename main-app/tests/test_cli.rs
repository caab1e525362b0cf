// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.

//! Command line handling of the binary. Nothing here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_mentions_all_flag() {
    Command::cargo_bin("senado_results").unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("Shows all parties"));
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("senado_results").unwrap()
        .arg("--year=2023")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn positional_arguments_are_rejected() {
    Command::cargo_bin("senado_results").unwrap()
        .arg("99")
        .assert()
        .failure();
}

#[test]
fn bad_all_value_is_rejected() {
    Command::cargo_bin("senado_results").unwrap()
        .arg("--all=maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid boolean value maybe"));
}
