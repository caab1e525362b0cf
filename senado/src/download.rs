// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.

//! Get the results document from the publisher.

use reqwest::StatusCode;
use thiserror::Error;

/// Where the results are published. National totals for the 2019 Senate election.
pub const RESULTS_URL : &str = "https://elecciones.unidadeditorial.es/elecciones-generales/resultados/senado/2019/99.json";

#[derive(Error, Debug)]
pub enum FetchError {
    /// Could not connect, or timed out.
    #[error("Error making http request: {0}")]
    Network(reqwest::Error),
    /// Got an answer, but not a 200. Contains the status text, e.g. "404 Not Found".
    #[error("Error response making http request: {0}")]
    HttpStatus(String),
    #[error("Error reading body: {0}")]
    Read(reqwest::Error),
}

/// Download the results document.
///
/// The url argument is not used; the document always comes from [RESULTS_URL].
/// Use [fetch_from] to actually request a different address.
pub fn fetch(_url:&str) -> Result<Vec<u8>,FetchError> {
    fetch_from(RESULTS_URL)
}

/// Download a url using Reqwest, returning the body if the status was 200.
///
/// The response is dropped (and its connection released) on every path out of here.
pub fn fetch_from(url:&str) -> Result<Vec<u8>,FetchError> {
    tracing::debug!(url, "Downloading with reqwest");
    let response = reqwest::blocking::get(url).map_err(FetchError::Network)?;
    let status = response.status();
    tracing::debug!(%status, "Got response");
    if status != StatusCode::OK {
        return Err(FetchError::HttpStatus(status.to_string()));
    }
    let contents = response.bytes().map_err(FetchError::Read)?;
    Ok(contents.to_vec())
}
