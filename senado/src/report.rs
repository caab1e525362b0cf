// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.

//! Print a plain text summary of the results, followed by one line per party.
//!
//! The labels are Spanish, as in the source document.

use std::io::Write;
use crate::election_results::{ElectionSummary, PartyResult};

/// Sort by seats, most first, ties by abbreviation. Stable, so identical keys keep their relative order.
pub fn sort_parties(parties:&mut [PartyResult]) {
    parties.sort_by(PartyResult::cmp_by_seats_then_abbreviation);
}

/// The line for a party, without trailing newline.
/// ```
/// use senado::election_results::PartyResult;
/// use senado::report::party_line;
/// let party = PartyResult{ abbreviation: "PSOE".to_string(), seats: 120, votes: 7500000, vote_percentage: 28.5, ..PartyResult::default() };
/// assert_eq!(party_line(&party),"                      PSOE: Escanos 120, Votos:         7500000(28.50%)");
/// ```
pub fn party_line(party:&PartyResult) -> String {
    format!("{:>26}: Escanos {:>3}, Votos: {:>15}({:3.2}%)",party.abbreviation,party.seats,party.votes,party.vote_percentage)
}

/// Write the report to `out`. Sorts summary.parties first.
///
/// If `include_zero_seats` is false, parties that did not win a seat are left out.
pub fn write_report<W:Write>(out:&mut W,summary:&mut ElectionSummary,include_zero_seats:bool) -> std::io::Result<()> {
    write!(out,"Resultados Generales:\n\n")?;
    // Plain {} never switches to exponent form, so tiny values print as e.g. 0.00005 rather than 5e-05.
    write!(out,"Escrutado:    {}%\n\n",summary.scrutinized_percentage)?;
    writeln!(out,"Abstencion:   {} ({}%)",summary.abstention,summary.abstention_percentage)?;
    writeln!(out,"Voto Nulo:    {} ({}%)",summary.null_votes,summary.null_votes_percentage)?;
    write!(out,"Voto Blanco:  {} ({}%)\n\n",summary.blank_votes,summary.blank_votes_percentage)?;
    sort_parties(&mut summary.parties);
    for party in &summary.parties {
        if !include_zero_seats && !party.has_seats() { continue; }
        writeln!(out,"{}",party_line(party))?;
    }
    Ok(())
}

/// Write the report to stdout.
pub fn report(summary:&mut ElectionSummary,include_zero_seats:bool) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out,summary,include_zero_seats)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use crate::election_results::PartyResult;
    use crate::report::{party_line, sort_parties};

    fn party(abbreviation:&str,seats:i64) -> PartyResult {
        PartyResult{ abbreviation: abbreviation.to_string(), seats, ..PartyResult::default() }
    }

    #[test]
    fn test_sort_order() {
        let mut parties = vec![party("VOX",0),party("PP",83),party("ERC",11),party("PSOE",139),party("EH Bildu",1),party("JxCAT",2),party("EAJ-PNV",9),party("ASG",1),party("Cs",0)];
        sort_parties(&mut parties);
        let names : Vec<&str> = parties.iter().map(|p|p.abbreviation.as_str()).collect();
        assert_eq!(names,vec!["PSOE","PP","ERC","EAJ-PNV","JxCAT","ASG","EH Bildu","Cs","VOX"]);
        for pair in parties.windows(2) {
            assert!(pair[0].seats>pair[1].seats || (pair[0].seats==pair[1].seats && pair[0].abbreviation<=pair[1].abbreviation));
        }
    }

    #[test]
    fn test_sort_is_stable_for_identical_keys() {
        let mut first = party("X",4);
        first.identifier="first".to_string();
        let mut second = party("X",4);
        second.identifier="second".to_string();
        let mut parties = vec![party("A",1),first,second,party("B",9)];
        sort_parties(&mut parties);
        let ids : Vec<&str> = parties.iter().map(|p|p.identifier.as_str()).collect();
        assert_eq!(ids,vec!["","first","second",""]);
        assert_eq!(parties[0].abbreviation,"B");
        assert_eq!(parties[3].abbreviation,"A");
    }

    #[test]
    fn test_sort_negative_seats_last() {
        let mut parties = vec![party("A",-1),party("B",0)];
        sort_parties(&mut parties);
        assert_eq!(parties[0].abbreviation,"B");
    }

    #[test]
    fn test_party_line_widths() {
        let p = PartyResult{ abbreviation: "PP".to_string(), seats: 5, votes: 42, vote_percentage: 0.126, ..PartyResult::default() };
        assert_eq!(party_line(&p),format!("{}PP: Escanos   5, Votos: {}42(0.13%)"," ".repeat(24)," ".repeat(13)));
        // Long labels are not truncated.
        let long = PartyResult{ abbreviation: "A".repeat(30), seats: 1234, ..PartyResult::default() };
        assert_eq!(party_line(&long),format!("{}: Escanos 1234, Votos: {}0(0.00%)","A".repeat(30)," ".repeat(14)));
    }
}
