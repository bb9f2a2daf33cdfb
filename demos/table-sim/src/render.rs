use std::fmt::{Result, Write};
use routesim::prelude::*;

/// Which rows a printed table shows.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Rows {
    /// every destination, the origin shown with `-` as its next hop
    All,
    /// every destination except the origin itself
    SkipSelf,
}

pub fn table(out: &mut impl Write, table: &RoutingTable, rows: Rows) -> Result {
    writeln!(out, "Node {} Routing Table:", table.origin)?;
    writeln!(out, "Dest\tCost\tNext Hop")?;
    for (dest, route) in table.iter() {
        if rows == Rows::SkipSelf && dest == table.origin {
            continue;
        }
        match route.next_hop {
            Some(hop) => writeln!(out, "{dest}\t{}\t{hop}", route.cost)?,
            None => writeln!(out, "{dest}\t{}\t-", route.cost)?,
        }
    }
    writeln!(out)
}

/// The convergence trace followed by the final tables.
pub fn distance_vector(out: &mut impl Write, report: &EngineReport) -> Result {
    writeln!(out, "\n--- Distance Vector Routing Simulation ---")?;
    for snapshot in &report.trace {
        if snapshot.pass == 0 {
            writeln!(out, "*** DVR Initial Tables ***")?;
        } else {
            writeln!(out, "*** DVR Iteration {} ***", snapshot.pass)?;
        }
        for t in &snapshot.tables {
            table(out, t, Rows::All)?;
        }
    }
    writeln!(out, "--- DVR Final Tables ---")?;
    for t in &report.tables {
        table(out, t, Rows::All)?;
    }
    Ok(())
}

pub fn link_state(out: &mut impl Write, report: &EngineReport) -> Result {
    writeln!(out, "\n--- Link State Routing Simulation ---")?;
    for t in &report.tables {
        table(out, t, Rows::SkipSelf)?;
    }
    Ok(())
}

pub fn text(dvr: &EngineReport, lsr: &EngineReport) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    distance_vector(&mut out, dvr)?;
    link_state(&mut out, lsr)?;
    Ok(out)
}
