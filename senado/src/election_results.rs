// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.


//! The results document as published. Field names are English, JSON keys are the Spanish ones used by the source.

use serde::{Deserialize,Deserializer,Serialize};
use std::cmp::Ordering;

/// A null in the source leaves the field at its zero value, same as if it were missing.
fn null_as_default<'de,D,T>(deserializer:D) -> Result<T,D::Error> where D:Deserializer<'de>, T:Default+Deserialize<'de> {
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Overall results for the election, as a single flat record.
///
/// Nothing here is validated. Values are whatever the source sent, and anything
/// the source left out or sent as null is zero or empty.
#[derive(Debug,Serialize,Deserialize,Clone,Default,PartialEq)]
#[serde(default)]
pub struct ElectionSummary {
    /// Number of people on the electoral roll.
    #[serde(rename="censo",deserialize_with="null_as_default")]
    pub census : i64,
    #[serde(rename="censo_escrutado",deserialize_with="null_as_default")]
    pub scrutinized_census : i64,
    /// Percentage of the roll counted so far (Escrutado).
    #[serde(rename="porcentaje_censo_escrutado",deserialize_with="null_as_default")]
    pub scrutinized_percentage : f64,
    #[serde(rename="abstencion",deserialize_with="null_as_default")]
    pub abstention : i64,
    #[serde(rename="porcentaje_abstencion",deserialize_with="null_as_default")]
    pub abstention_percentage : f64,
    #[serde(rename="votos_blanco",deserialize_with="null_as_default")]
    pub blank_votes : i64,
    #[serde(rename="porcentaje_votos_blanco",deserialize_with="null_as_default")]
    pub blank_votes_percentage : f64,
    /// informal votes (Voto Nulo)
    #[serde(rename="votos_nulos",deserialize_with="null_as_default")]
    pub null_votes : i64,
    #[serde(rename="porcentaje_votos_nulos",deserialize_with="null_as_default")]
    pub null_votes_percentage : f64,
    #[serde(rename="total_votantes",deserialize_with="null_as_default")]
    pub total_voters : i64,
    #[serde(rename="porcentaje_total_votantes",deserialize_with="null_as_default")]
    pub total_voters_percentage : f64,
    /// Seats in contest. The source calls these diputados even for the Senate.
    #[serde(rename="diputados",deserialize_with="null_as_default")]
    pub seats : i64,
    #[serde(rename="mesas_totales",deserialize_with="null_as_default")]
    pub polling_stations : i64,
    /// Autonomous community, e.g. "99" for the whole country.
    #[serde(rename="ccaa_code",deserialize_with="null_as_default")]
    pub region_code : String,
    #[serde(deserialize_with="null_as_default")]
    pub code : String,
    #[serde(rename="type",deserialize_with="null_as_default")]
    pub election_type : String,
    #[serde(deserialize_with="null_as_default")]
    pub year : i64,
    #[serde(deserialize_with="null_as_default")]
    pub month : String,
    #[serde(deserialize_with="null_as_default")]
    pub slug : String,
    #[serde(deserialize_with="null_as_default")]
    pub name : String,
    #[serde(rename="id_registro",deserialize_with="null_as_default")]
    pub record_id : String,
    /// In the order the source lists them. See [crate::report::sort_parties].
    #[serde(rename="partidos",deserialize_with="null_as_default")]
    pub parties : Vec<PartyResult>,
}

/// How one party did.
#[derive(Debug,Serialize,Deserialize,Clone,Default,PartialEq)]
#[serde(default)]
pub struct PartyResult {
    /// Display label (siglas), e.g. "PSOE".
    #[serde(rename="siglas",deserialize_with="null_as_default")]
    pub abbreviation : String,
    #[serde(rename="siglas_cortas",deserialize_with="null_as_default")]
    pub short_code : String,
    #[serde(rename="id",deserialize_with="null_as_default")]
    pub identifier : String,
    /// A display hint from the source. Not printed.
    #[serde(deserialize_with="null_as_default")]
    pub color : String,
    #[serde(rename="diputados",deserialize_with="null_as_default")]
    pub seats : i64,
    #[serde(rename="votos",deserialize_with="null_as_default")]
    pub votes : i64,
    #[serde(rename="porcentaje_votos",deserialize_with="null_as_default")]
    pub vote_percentage : f64,
}

impl PartyResult {
    /// Order by seats won, most first, and then alphabetically by abbreviation.
    pub fn cmp_by_seats_then_abbreviation(&self,other:&PartyResult) -> Ordering {
        other.seats.cmp(&self.seats).then_with(||self.abbreviation.cmp(&other.abbreviation))
    }

    /// Whether the party won anything.
    pub fn has_seats(&self) -> bool { self.seats >= 1 }
}

impl ElectionSummary {
    /// The parties in report order, leaving self.parties alone.
    pub fn sorted_parties(&self) -> Vec<PartyResult> {
        let mut res = self.parties.clone();
        res.sort_by(PartyResult::cmp_by_seats_then_abbreviation);
        res
    }
}
