//! engine::session
//!
//! Line-oriented protocol carrying the reset / move / view verbs.
//!
//! # Protocol
//!
//! One request per line; blank lines and lines starting with `#` are
//! ignored.
//!
//! ```text
//! reset                 -> ok
//! move F                -> ok          (Singmaster notation)
//! move U'               -> ok
//! move front ccw        -> ok          (face name or letter + direction)
//! move 2 true           -> ok          (wire code + clockwise flag)
//! view                  -> the rendered net
//! help                  -> command summary
//! quit                  -> ends the session
//! ```
//!
//! Malformed requests and invalid faces answer `error: <message>`; the cube
//! is left as it was and the session keeps reading.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::service::CubeService;
use crate::core::types::{Face, Turn, TypeError};
use crate::ui::render::Renderer;

const HELP: &str = "\
commands:
  reset                     restore the solved cube
  move <turn>               e.g. F, U', r
  move <face> [cw|ccw]      face name, letter or code 0-5
  view                      print the cube net
  help                      show this message
  quit                      end the session";

/// Errors from parsing or executing a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("'{0}' expects {1}")]
    BadArguments(&'static str, &'static str),

    #[error("invalid direction '{0}', expected cw or ccw")]
    InvalidDirection(String),

    #[error(transparent)]
    Type(#[from] TypeError),
}

/// A parsed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Reset,
    /// Turn named by notation or face name.
    Move(Turn),
    /// Turn named by numeric wire code, resolved by the service.
    MoveCode { code: usize, clockwise: bool },
    View,
    Help,
    Quit,
}

impl Request {
    /// Parse one protocol line. Returns `Ok(None)` for blank and comment
    /// lines.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = tokens.collect();

        let request = match command.as_str() {
            "reset" => no_args(Request::Reset, "reset", &args)?,
            "view" => no_args(Request::View, "view", &args)?,
            "help" => no_args(Request::Help, "help", &args)?,
            "quit" | "exit" => no_args(Request::Quit, "quit", &args)?,
            "move" => parse_move(&args)?,
            _ => return Err(SessionError::UnknownCommand(command)),
        };
        Ok(Some(request))
    }
}

fn no_args(request: Request, name: &'static str, args: &[&str]) -> Result<Request, SessionError> {
    if args.is_empty() {
        Ok(request)
    } else {
        Err(SessionError::BadArguments(name, "no arguments"))
    }
}

fn parse_move(args: &[&str]) -> Result<Request, SessionError> {
    let (face, clockwise) = match args {
        [face] => (*face, None),
        [face, direction] => (*face, Some(parse_direction(direction)?)),
        _ => {
            return Err(SessionError::BadArguments(
                "move",
                "a turn, or a face and a direction",
            ))
        }
    };

    if face.chars().all(|c| c.is_ascii_digit()) {
        let code = face
            .parse::<usize>()
            .map_err(|_| TypeError::InvalidFace(face.to_string()))?;
        return Ok(Request::MoveCode {
            code,
            clockwise: clockwise.unwrap_or(true),
        });
    }

    match clockwise {
        Some(clockwise) => Ok(Request::Move(Turn::new(face.parse::<Face>()?, clockwise))),
        None => Ok(Request::Move(face.parse::<Turn>()?)),
    }
}

fn parse_direction(token: &str) -> Result<bool, SessionError> {
    match token.to_ascii_lowercase().as_str() {
        "cw" | "clockwise" | "true" => Ok(true),
        "ccw" | "counterclockwise" | "anticlockwise" | "false" => Ok(false),
        _ => Err(SessionError::InvalidDirection(token.to_string())),
    }
}

/// Options controlling session output.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// How `view` replies are rendered.
    pub renderer: Renderer,
    /// Printed before each line is read.
    pub prompt: String,
    /// Print the net after every successful move.
    pub auto_view: bool,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub requests: usize,
    pub moves: usize,
    pub errors: usize,
}

/// Drives the protocol against a shared [`CubeService`].
pub struct Session<'a> {
    service: &'a CubeService,
    options: SessionOptions,
    stats: SessionStats,
}

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl<'a> Session<'a> {
    pub fn new(service: &'a CubeService, options: SessionOptions) -> Self {
        Self {
            service,
            options,
            stats: SessionStats::default(),
        }
    }

    /// Read requests from `input` until EOF or `quit`, writing replies to
    /// `output`.
    ///
    /// # Errors
    ///
    /// Only I/O errors end the session early; protocol errors are replied
    /// to and counted.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> io::Result<SessionStats> {
        self.write_prompt(output)?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, output)? == Flow::Stop {
                break;
            }
            self.write_prompt(output)?;
        }
        Ok(self.stats)
    }

    /// Handle one protocol line.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let request = match Request::parse(line) {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.stats.requests += 1;
                return self.reply_error(&e, output);
            }
        };
        self.stats.requests += 1;
        debug!(?request, "session request");

        match request {
            Request::Reset => {
                self.service.reset();
                writeln!(output, "ok")?;
            }
            Request::Move(turn) => {
                self.service.apply(turn);
                self.after_move(output)?;
            }
            Request::MoveCode { code, clockwise } => {
                if let Err(e) = self.service.turn_index(code, clockwise) {
                    return self.reply_error(&SessionError::from(e), output);
                }
                self.after_move(output)?;
            }
            Request::View => self.write_view(output)?,
            Request::Help => writeln!(output, "{}", HELP)?,
            Request::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Counters so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    fn after_move<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        self.stats.moves += 1;
        writeln!(output, "ok")?;
        if self.options.auto_view {
            self.write_view(output)?;
        }
        Ok(())
    }

    fn write_view<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let rendered = self
            .options
            .renderer
            .render(&self.service.view())
            .map_err(io::Error::other)?;
        writeln!(output, "{}", rendered)
    }

    fn reply_error<W: Write>(&mut self, error: &SessionError, output: &mut W) -> io::Result<Flow> {
        self.stats.errors += 1;
        debug!(error = %error, "session request rejected");
        writeln!(output, "error: {}", error)?;
        Ok(Flow::Continue)
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if !self.options.prompt.is_empty() {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cube::CubeState;
    use crate::ui::render::Format;

    fn run(service: &CubeService, options: SessionOptions, input: &str) -> (String, SessionStats) {
        let mut output = Vec::new();
        let stats = Session::new(service, options)
            .run(input.as_bytes(), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    mod parsing {
        use super::*;

        #[test]
        fn simple_commands() {
            assert_eq!(Request::parse("reset"), Ok(Some(Request::Reset)));
            assert_eq!(Request::parse("  VIEW "), Ok(Some(Request::View)));
            assert_eq!(Request::parse("exit"), Ok(Some(Request::Quit)));
            assert_eq!(Request::parse(""), Ok(None));
            assert_eq!(Request::parse("# comment"), Ok(None));
        }

        #[test]
        fn move_forms() {
            assert_eq!(
                Request::parse("move F'"),
                Ok(Some(Request::Move(Turn::ccw(Face::Front))))
            );
            assert_eq!(
                Request::parse("move up cw"),
                Ok(Some(Request::Move(Turn::cw(Face::Up))))
            );
            assert_eq!(
                Request::parse("move l false"),
                Ok(Some(Request::Move(Turn::ccw(Face::Left))))
            );
            assert_eq!(
                Request::parse("move 4 ccw"),
                Ok(Some(Request::MoveCode {
                    code: 4,
                    clockwise: false
                }))
            );
            assert_eq!(
                Request::parse("move 9"),
                Ok(Some(Request::MoveCode {
                    code: 9,
                    clockwise: true
                }))
            );
        }

        #[test]
        fn bad_requests() {
            assert_eq!(
                Request::parse("spin F"),
                Err(SessionError::UnknownCommand("spin".into()))
            );
            assert!(matches!(
                Request::parse("move"),
                Err(SessionError::BadArguments("move", _))
            ));
            assert!(matches!(
                Request::parse("reset now"),
                Err(SessionError::BadArguments("reset", _))
            ));
            assert_eq!(
                Request::parse("move F sideways"),
                Err(SessionError::InvalidDirection("sideways".into()))
            );
            assert!(matches!(
                Request::parse("move Q"),
                Err(SessionError::Type(TypeError::InvalidTurn(_)))
            ));
            assert!(matches!(
                Request::parse("move top cw"),
                Err(SessionError::Type(TypeError::InvalidFace(_)))
            ));
        }
    }

    mod running {
        use super::*;

        #[test]
        fn move_and_view() {
            let service = CubeService::new();
            let options = SessionOptions {
                renderer: Renderer {
                    empty: '.',
                    ..Default::default()
                },
                ..Default::default()
            };
            let (out, stats) = run(&service, options, "move F\nview\n");

            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines[0], "ok");
            // Up row 2 took the Left column.
            assert_eq!(lines[3], ". . . O O O . . . . . .");
            assert_eq!(stats.moves, 1);
            assert_eq!(stats.errors, 0);
        }

        #[test]
        fn invalid_code_reports_error_and_keeps_state() {
            let service = CubeService::new();
            service.turn(Face::Back, true);
            let before = service.snapshot();

            let (out, stats) = run(&service, SessionOptions::default(), "move 6 true\n");

            assert_eq!(out.trim(), "error: invalid face identifier: 6");
            assert_eq!(service.snapshot(), before);
            assert_eq!(stats.errors, 1);
            assert_eq!(stats.moves, 0);
        }

        #[test]
        fn errors_do_not_stop_the_session() {
            let service = CubeService::new();
            let (out, stats) = run(
                &service,
                SessionOptions::default(),
                "bogus\nmove R\n\n# note\nreset\n",
            );
            let lines: Vec<&str> = out.lines().collect();
            assert!(lines[0].starts_with("error: unknown command"));
            assert_eq!(lines[1..], ["ok", "ok"]);
            assert_eq!(stats.requests, 3);
            assert_eq!(service.snapshot(), CubeState::solved());
        }

        #[test]
        fn quit_stops_reading() {
            let service = CubeService::new();
            let (out, stats) = run(&service, SessionOptions::default(), "move U\nquit\nmove U\n");
            assert_eq!(out, "ok\n");
            assert_eq!(stats.moves, 1);
        }

        #[test]
        fn auto_view_prints_after_moves() {
            let service = CubeService::new();
            let options = SessionOptions {
                renderer: Renderer {
                    format: Format::Json,
                    ..Default::default()
                },
                auto_view: true,
                ..Default::default()
            };
            let (out, _) = run(&service, options, "move D'\n");
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0], "ok");
            assert!(lines[1].starts_with("[["));
        }

        #[test]
        fn prompt_is_written_before_each_line() {
            let service = CubeService::new();
            let options = SessionOptions {
                prompt: "> ".into(),
                ..Default::default()
            };
            let (out, _) = run(&service, options, "reset\n");
            assert_eq!(out, "> ok\n> ");
        }
    }
}
