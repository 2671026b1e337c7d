use std::io;

use rootlab_core::SqrtCos;
use rootlab_solve::equation::{
    Action, Event, Solution, Status, chord, newton,
    start::{self, Start, StartError},
};
use rootlab_table::Table;
use tracing::{debug, info, trace, warn};

use crate::{
    Error, Settings,
    project::{Auxiliary, header, project},
};

/// Results of a completed run: both methods in both loop styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Chord method, `while`-loop rendition.
    pub chord: Solution,
    /// Chord method, iterator rendition.
    pub chord_stepwise: Solution,
    /// Newton's starting endpoint.
    pub start: Start,
    /// Newton's method, `while`-loop rendition.
    pub newton: Solution,
    /// Newton's method, iterator rendition.
    pub newton_stepwise: Solution,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Both methods ran.
    Completed(Report),
    /// Neither endpoint satisfies Fourier's condition, so nothing was solved.
    NoNewtonStart(StartError),
}

impl Report {
    /// Builds the four iteration tables followed by the demo table.
    ///
    /// # Errors
    ///
    /// Returns an error if a projected row does not match its header.
    pub fn tables(&self) -> Result<Vec<Table>, Error> {
        let equation = SqrtCos;
        let runs = [
            (&self.chord, Auxiliary::InverseOnePlusF),
            (&self.chord_stepwise, Auxiliary::InverseOnePlusF),
            (&self.newton, Auxiliary::Derivative),
            (&self.newton_stepwise, Auxiliary::Derivative),
        ];

        let mut tables = Vec::with_capacity(runs.len() + 1);
        for (solution, auxiliary) in runs {
            let rows = project(&equation, &solution.trail, auxiliary);
            tables.push(Table::new(header(auxiliary)).with_rows(rows)?);
        }
        tables.push(demo_table()?);

        Ok(tables)
    }
}

/// Solves the equation with both methods without writing anything.
///
/// # Errors
///
/// Returns an error if the settings do not form a valid solver config.
pub fn solve_all(settings: &Settings) -> Result<Outcome, Error> {
    let equation = SqrtCos;
    let config = settings.solver_config()?;

    let chord = chord::solve(&equation, settings.bracket, &config, tracer("chord"));
    log_solution("chord", &chord);

    let mut steps = chord::steps(&equation, settings.bracket, &config);
    for snapshot in &mut steps {
        trace!(method = "chord", x = snapshot.current, gap = snapshot.gap(), "step");
    }
    let chord_stepwise = steps.finish();
    log_solution("chord (stepwise)", &chord_stepwise);

    let start = match start::select(&equation, settings.bracket, settings.start_policy) {
        Ok(start) => start,
        Err(err) => {
            warn!(%err, "no starting point for Newton's method");
            return Ok(Outcome::NoNewtonStart(err));
        }
    };
    info!(
        endpoint = ?start.endpoint,
        x0 = start.x,
        product = start.product,
        "Newton start selected"
    );

    let newton = newton::solve(&equation, start.x, &config, tracer("newton"));
    log_solution("newton", &newton);

    let newton_stepwise = newton::solve_stepwise(&equation, start.x, &config);
    log_solution("newton (stepwise)", &newton_stepwise);

    Ok(Outcome::Completed(Report {
        chord,
        chord_stepwise,
        start,
        newton,
        newton_stepwise,
    }))
}

/// Solves the equation and writes the tables, or the diagnostic, to `out`.
///
/// # Errors
///
/// Returns an error if the settings are invalid or `out` cannot be written.
pub fn run<W: io::Write>(settings: &Settings, out: &mut W) -> Result<Outcome, Error> {
    let outcome = solve_all(settings)?;

    match &outcome {
        Outcome::Completed(report) => {
            for table in report.tables()? {
                table.render(out)?;
            }
        }
        Outcome::NoNewtonStart(err) => {
            writeln!(
                out,
                "Error: at least one endpoint must satisfy Fourier's condition \
                 f(x)·f''(x) >= 0 ({err})."
            )?;
        }
    }

    out.flush()?;
    Ok(outcome)
}

/// Returns an observer that traces every iteration of `method`.
fn tracer(method: &'static str) -> impl FnMut(&Event) -> Option<Action> {
    move |event: &Event| {
        trace!(
            method,
            iter = event.iter,
            x = event.snapshot.current,
            next = event.next,
            "iteration"
        );
        None
    }
}

fn log_solution(method: &str, solution: &Solution) {
    match solution.status {
        Status::Converged => debug!(
            method,
            root = solution.root,
            iters = solution.iters,
            "converged"
        ),
        status => warn!(
            method,
            ?status,
            root = solution.root,
            iters = solution.iters,
            "did not converge"
        ),
    }
}

fn demo_table() -> Result<Table, Error> {
    let table = Table::new(["Header1", "Header2"])
        .with_rows([["Row1Col1", "Row1Col2"], ["Row2Col1", "Row2Col2"]])?;
    Ok(table)
}
