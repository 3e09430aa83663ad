use anyhow::{Context, Result, bail};
use minegrid_core::{Coord, Coord2};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Click(Coord2),
    Show,
    Quit,
}

impl Command {
    /// Accepts `x y`, `x,y`, an empty line to redraw, and `q`/`quit`.
    pub(crate) fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        match line {
            "" => return Ok(Self::Show),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Expected `x y`, got {line:?}");
        };

        let x: Coord = x.parse().with_context(|| format!("Bad x coordinate {x:?}"))?;
        let y: Coord = y.parse().with_context(|| format!("Bad y coordinate {y:?}"))?;
        Ok(Self::Click((x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clicks() {
        assert_eq!(Command::parse("3 4").unwrap(), Command::Click((3, 4)));
        assert_eq!(Command::parse(" 3,4 \n").unwrap(), Command::Click((3, 4)));
        assert_eq!(Command::parse("-1  0").unwrap(), Command::Click((-1, 0)));
    }

    #[test]
    fn parses_control_words() {
        assert_eq!(Command::parse("").unwrap(), Command::Show);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Command::parse("3").is_err());
        assert!(Command::parse("1 2 3").is_err());
        assert!(Command::parse("a b").is_err());
        assert!(Command::parse("1 99999").is_err());
    }
}
