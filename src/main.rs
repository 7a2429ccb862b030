use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use letter_boxed::{
    Coverage, GameDataFile, Layout, Puzzle, SearchConfig, Solution, WordListFile, WordProvider,
};

#[derive(Parser)]
#[command(name = "letter-boxed")]
#[command(version)]
#[command(about = "Find chains of words that solve a Letter Boxed puzzle")]
struct Cli {
    /// Comma separated sides of the box, e.g. `rxn,aof,htc,epi`
    #[arg(long, short, required_unless_present = "game_data")]
    sides: Option<String>,

    /// Newline delimited word list
    #[arg(long, short, conflicts_with = "game_data", required_unless_present = "game_data")]
    dictionary: Option<PathBuf>,

    /// Game data JSON holding the dictionary and the sides
    #[arg(long, short)]
    game_data: Option<PathBuf>,

    /// Maximum number of words in a solution
    #[arg(long, short, default_value_t = 3)]
    max_words: usize,

    /// Letters a solution has to use
    #[arg(long, value_enum, default_value_t = CoverageArg::Layout)]
    coverage: CoverageArg,

    /// Search on every core and print the solutions sorted
    #[arg(long, short)]
    parallel: bool,

    /// Stop after this many solutions
    #[arg(long, short)]
    limit: Option<usize>,

    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CoverageArg {
    /// Every letter on the box
    Layout,
    /// Only letters that start some admissible word
    StartingLetters,
}

impl From<CoverageArg> for Coverage {
    fn from(arg: CoverageArg) -> Coverage {
        match arg {
            CoverageArg::Layout => Coverage::Layout,
            CoverageArg::StartingLetters => Coverage::StartingLetters,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// What the search runs on: the dictionary, the box, and the puzzle date if the game data had one.
struct Input {
    words: Vec<String>,
    layout: Layout,
    date: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    date: Option<&'a str>,
    sides: &'a [String],
    solutions: Vec<Solution>,
}

fn init_logging() {
    env_logger::init();
}

fn load_input(cli: &Cli) -> anyhow::Result<Input> {
    let data = cli
        .game_data
        .as_ref()
        .map(|path| GameDataFile::new(path).load())
        .transpose()?;

    // clap only lets `--dictionary` and `--sides` be left out when game data is given
    let words = match &cli.dictionary {
        Some(path) => WordListFile::new(path).words()?,
        None => data.as_ref().context("no dictionary given")?.words()?,
    };
    let layout = match &cli.sides {
        Some(sides) => sides.parse::<Layout>()?,
        None => data
            .as_ref()
            .context("no sides given")?
            .layout()
            .context("game data holds a malformed layout")?,
    };

    Ok(Input {
        words,
        layout,
        date: data.and_then(|d| d.print_date),
    })
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let input = load_input(cli)?;
    let puzzle = Puzzle::compile(input.words, input.layout);
    info!(
        "{} admissible words for {}",
        puzzle.vocabulary().len(),
        puzzle.layout().sides().join(",")
    );

    let config = SearchConfig::new(cli.max_words).with_coverage(cli.coverage.into());
    let start = Instant::now();
    let solutions: Box<dyn Iterator<Item = Solution> + '_> = if cli.parallel {
        Box::new(puzzle.solve_all(&config).into_iter())
    } else {
        Box::new(puzzle.search(&config))
    };
    let solutions = solutions.take(cli.limit.unwrap_or(usize::MAX));

    match cli.format {
        OutputFormat::Text => {
            let mut count = 0;
            for solution in solutions {
                writeln!(out, "{}", solution)?;
                count += 1;
            }
            writeln!(out, "Found {} solutions in {:?}", count, start.elapsed())?;
        }
        OutputFormat::Json => {
            let report = Report {
                date: input.date.as_deref(),
                sides: puzzle.layout().sides(),
                solutions: solutions.collect(),
            };
            info!(
                "found {} solutions in {:?}",
                report.solutions.len(),
                start.elapsed()
            );
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}
