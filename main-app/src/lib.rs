// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.

//! Glue between the command line and the [senado] library.
//! The binary is a thin wrapper around [run].

use std::ffi::OsString;
use anyhow::Context;
use clap::Parser;
use senado::download::{fetch, RESULTS_URL};
use senado::parse::decode;
use senado::election_results::ElectionSummary;
use senado::report::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser,Debug)]
#[clap(version = "0.2", author = "Andrew Conway", name="senado_results")]
/// Print the results of the Spanish Senate election, party by party,
/// most seats first.
pub struct Opts {
    /// Shows all parties even if they have no seats.
    /// May be given a value, e.g. --all=false.
    #[clap(long,num_args=0..=1,require_equals=true,default_missing_value="true",default_value="false",action=clap::ArgAction::Set,value_parser=parse_flag_bool)]
    pub all : bool,
}

impl Opts {
    /// Like [Parser::parse_from], but also takes the single dash forms -all and -all=VALUE.
    pub fn parse_lenient<I,T>(args:I) -> Self where I:IntoIterator<Item=T>, T:Into<OsString> {
        Opts::parse_from(args.into_iter().map(|a|double_dash_long_flag(a.into())))
    }
}

/// -all or -all=VALUE become --all or --all=VALUE. Anything else is untouched.
fn double_dash_long_flag(arg:OsString) -> OsString {
    let single_dash = matches!(arg.to_str(),Some(s) if s=="-all" || s.starts_with("-all="));
    if single_dash {
        let mut res = OsString::from("-");
        res.push(&arg);
        res
    } else { arg }
}

/// The spellings of true and false accepted for flag values: 1, t, T, TRUE, true, True and the like for false.
pub fn parse_flag_bool(s:&str) -> Result<bool,String> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value {}",s)),
    }
}

/// Decode a downloaded results document, saying which stage failed if it is not usable.
pub fn decode_results(body:&[u8]) -> anyhow::Result<ElectionSummary> {
    decode(body).context("decoding election results")
}

/// Download, decode and print to stdout.
pub fn run(opts:&Opts) -> anyhow::Result<()> {
    let body = fetch(RESULTS_URL).context("fetching election results")?;
    let mut summary = decode_results(&body)?;
    report(&mut summary,opts.all).context("writing report")?;
    Ok(())
}

/// Log to stderr. RUST_LOG overrides the default level of warn.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
