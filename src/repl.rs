//! The command loop: one command per line, graph printed on `g`

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use streetgraph_core::{Graph, Session, render_text, to_geojson_string};
use tracing::{debug, info, warn};

use crate::command::{Command, parse_line};
use crate::config::{AppConfig, OutputFormat};
use crate::error::AppError;

pub struct Repl {
    session: Session,
    format: OutputFormat,
}

impl Repl {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::new(config.builder),
            format: config.format,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands until `exit` or end of input.
    ///
    /// Rejected commands are reported on `errors` as `Error: <reason>` and
    /// leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the streams end the loop early.
    pub fn run<R, W, E>(&mut self, input: R, output: &mut W, errors: &mut E) -> Result<(), AppError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line, output) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(err) if err.is_recoverable() => {
                    warn!("Rejected command {line:?}: {err}");
                    writeln!(errors, "Error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Parses and executes a single line.
    ///
    /// # Errors
    ///
    /// Returns the parse, store or output error that rejected the line.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> Result<ControlFlow<()>, AppError> {
        let Some(command) = parse_line(line)? else {
            return Ok(ControlFlow::Continue(()));
        };
        debug!(?command, "executing");

        match command {
            Command::Add { name, points } => self.session.add_street(&name, points)?,
            Command::Change { name, points } => self.session.change_street(&name, points)?,
            Command::Remove { name } => self.session.remove_street(&name)?,
            Command::Generate => {
                let format = self.format;
                let graph = self.session.generate();
                info!(
                    vertices = graph.vertex_count(),
                    edges = graph.edge_count(),
                    "graph generated"
                );
                writeln!(output, "{}", render(graph, format)?)?;
                output.flush()?;
            }
            Command::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }
}

fn render(graph: &Graph, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => render_text(graph),
        OutputFormat::Geojson => to_geojson_string(graph)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetgraph_core::{Point, StoreError};

    use crate::command::ParseError;

    fn repl() -> Repl {
        Repl::new(AppConfig::default())
    }

    #[test]
    fn blank_line_is_a_no_op() {
        let mut out = Vec::new();
        let flow = repl().handle_line("", &mut out).unwrap();
        assert_eq!(flow, ControlFlow::Continue(()));
        assert!(out.is_empty());
    }

    #[test]
    fn exit_breaks_the_loop() {
        let mut out = Vec::new();
        let flow = repl().handle_line("exit", &mut out).unwrap();
        assert_eq!(flow, ControlFlow::Break(()));
    }

    #[test]
    fn store_rejections_surface_as_errors() {
        let mut repl = repl();
        let mut out = Vec::new();
        repl.handle_line(r#"a "Main" (0,0) (1,1)"#, &mut out).unwrap();

        let err = repl.handle_line(r#"a "main" (2,2) (3,3)"#, &mut out).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::DuplicateStreet(_))));

        let err = repl.handle_line(r#"c "nowhere" (2,2) (3,3)"#, &mut out).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::UnknownStreet(_))));

        let err = repl.handle_line(r#"c "main""#, &mut out).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::EmptyPointList)));
        assert!(err.is_recoverable());

        assert_eq!(
            repl.session().streets().get("main").unwrap().points,
            vec![Point::new(0, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn parse_errors_are_recoverable() {
        let err = repl().handle_line("q", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Parse(ParseError::UnknownCommand(_))));
        assert!(err.is_recoverable());
    }

    #[test]
    fn run_reports_errors_and_keeps_going() {
        let input = "a \"Main\" (0,0) (10,0)\nbogus\na \"Cross\" (5,-5) (5,5)\ng\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        repl().run(input.as_bytes(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err, "Error: The command you entered was not found \"bogus\"\n");
        assert!(out.starts_with("V = {\n  1: (5,-5)\n"));
    }

    #[test]
    fn geojson_format_prints_feature_collection() {
        let mut repl = Repl::new(AppConfig {
            format: OutputFormat::Geojson,
            ..AppConfig::default()
        });
        let mut out = Vec::new();
        repl.handle_line("g", &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 0);
    }
}
