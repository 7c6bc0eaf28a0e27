use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub const GOLD: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Line-oriented terminal surface.
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Next input line, trimmed. `None` at end of input.
    ///
    /// Cancel-safe, so it can race a pending request in `select!`.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.next_line().await?.map(|l| l.trim().to_string()))
    }

    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{CYAN}{label} > {RESET}");
        io::stdout().flush()?;
        self.read_line().await
    }

    /// Prompt until a non-blank answer is given.
    pub async fn prompt_required(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label).await? {
                Some(answer) if answer.is_empty() => say_error("此项不能为空"),
                other => return Ok(other),
            }
        }
    }

    /// Print a growing reply, emitting only what was not printed before.
    pub fn stream_delta(printed: &mut usize, text: &str) -> io::Result<()> {
        if let Some(delta) = text.get(*printed..) {
            print!("{delta}");
            io::stdout().flush()?;
        }
        *printed = text.len();
        Ok(())
    }
}

pub fn heading(title: &str) {
    println!("\n{GOLD}{BOLD}✦ {title} ✦{RESET}\n");
}

pub fn say_error(text: &str) {
    println!("{RED}{text}{RESET}");
}

pub fn hint(text: &str) {
    println!("{DIM}{text}{RESET}");
}

/// Render `**bold**` runs of a markdown reply as ANSI bold.
pub fn render_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut bold = false;
    let mut rest = text;
    while let Some(pos) = rest.find("**") {
        out.push_str(&rest[..pos]);
        out.push_str(if bold { RESET } else { BOLD });
        bold = !bold;
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    if bold {
        out.push_str(RESET);
    }
    out
}

/// `▇▇▇▇▇▇▇···  72`
pub fn score_bar(score: i32) -> String {
    let filled = (score.clamp(0, 100) / 10) as usize;
    format!("{}{}  {}", "▇".repeat(filled), "·".repeat(10 - filled), score)
}
