// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.


//! Download the Spanish Senate results and print them.

use main_app::{init_logging, run, Opts};

fn main() {
    let opt : Opts = Opts::parse_lenient(std::env::args_os());
    init_logging();
    if let Err(e) = run(&opt) {
        tracing::error!("{:#}",e);
        std::process::exit(1);
    }
}
