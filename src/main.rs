//! Wordle Env CLI
//!
//! Play the environment interactively, watch the entropy policy play it, or
//! benchmark the policy over every answer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use wordle_env::entropy::expected_remaining;
use wordle_env::{
    play_episode, play_target, rank_guesses, CandidatePool, Config, Diagnostics, EntropyGuesser,
    Error, Observation, Pattern, ScoredGuess, Session, Status, Step, Word, WordLists,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Answer list (.txt or .json); overrides the config file
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,
    /// Accepted-guess list (.txt or .json); overrides the config file
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,
    /// Seed for target selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
    /// Number of ranked guesses to show
    #[arg(short, long, global = true)]
    top: Option<usize>,
    /// Valid guesses allowed per episode
    #[arg(short, long, global = true)]
    max_attempts: Option<usize>,
    /// Skip ranking the full answer list on reset
    #[arg(long, global = true)]
    no_opening_rank: bool,
    /// Play against this answer instead of a random one
    #[arg(long, global = true)]
    target: Option<String>,
    /// Print every step as a JSON line instead of prose
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,
    /// Let the entropy policy play
    Auto {
        /// Number of episodes
        #[arg(short, long, default_value_t = 1)]
        episodes: usize,
    },
    /// Show the best opening guesses
    Suggest,
    /// Let the entropy policy play every answer and report the distribution
    Bench,
    /// Suggest guesses for a game played elsewhere, from typed-in feedback
    Assist,
}

struct Context {
    session: Session,
    target: Option<Word>,
    top: usize,
    json: bool,
}

fn load(cli: &Cli) -> Result<Context, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(top) = cli.top {
        config.top = top;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.set_max_attempts(max_attempts);
    }
    if cli.no_opening_rank {
        config.set_rank_on_reset(false);
    }
    if cli.answers.is_some() {
        config.words.answers = cli.answers.clone();
    }
    if cli.guesses.is_some() {
        config.words.guesses = cli.guesses.clone();
    }
    config.validate()?;

    let lists = match (&config.words.answers, &config.words.guesses) {
        (Some(answers), Some(guesses)) => WordLists::load(answers, guesses)?,
        (Some(answers), None) => WordLists::load(answers, answers)?,
        (None, _) => WordLists::builtin()?,
    };
    let lists = Arc::new(lists);
    let target = cli.target.as_deref().map(Word::parse).transpose()?;

    let session = match config.seed {
        Some(seed) => Session::seeded(lists, config.session(), seed),
        None => Session::from_entropy(lists, config.session()),
    };

    Ok(Context {
        session,
        target,
        top: config.top,
        json: cli.json,
    })
}

fn print_ranking(ranking: &[ScoredGuess], pool_size: usize) {
    println!(
        "{:>4} {:>8} {:>8} {:>12} Possible?",
        "#", "Word", "Entropy", "Exp. Remain"
    );
    println!("{}", "-".repeat(50));
    for (i, guess) in ranking.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            guess.word,
            guess.entropy,
            expected_remaining(pool_size, guess.entropy),
            if guess.in_pool { "✓" } else { "" }
        );
    }
}

fn print_diagnostics(diagnostics: &Diagnostics, top: usize) {
    let ranking = diagnostics.top(top);
    if ranking.is_empty() {
        return;
    }
    println!();
    println!("Top {} next guesses:", ranking.len());
    print_ranking(ranking, diagnostics.pool_size);
}

fn print_step(step: &Step, top: usize) {
    if let Some(last) = step.observation.attempts.last() {
        match (&last.pattern, last.entropy, last.information_gain) {
            (Some(pattern), Some(entropy), Some(gain)) => {
                println!();
                println!(
                    "{} → {}",
                    last.guess.as_deref().unwrap_or_default(),
                    pattern.to_emoji_string()
                );
                println!("  Expected: {:.3} bits", entropy);
                println!("  Realized: {:.3} bits", gain);
            }
            _ => {
                println!(
                    "'{}' is not an accepted word.",
                    last.guess.as_deref().unwrap_or_default()
                );
            }
        }
    }
    println!(
        "Reward: {:.3}  Remaining: {}  Attempts: {}",
        step.reward, step.observation.pool_size, step.observation.valid_attempts
    );
    if !step.terminated {
        print_diagnostics(&step.diagnostics, top);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn reset(ctx: &mut Context) -> Result<(Observation, Diagnostics), Error> {
    match ctx.target {
        Some(target) => Ok(ctx.session.reset_with_target(target)?),
        None => Ok(ctx.session.reset()),
    }
}

fn run_interactive(ctx: &mut Context) -> Result<(), Error> {
    println!(
        "Loaded {} answers, {} accepted guesses.",
        ctx.session.lists().answers().len(),
        ctx.session.lists().guesses().len()
    );
    println!("Computing opening ranking...");
    let (observation, diagnostics) = reset(ctx)?;
    if ctx.json {
        print_json(&observation)?;
        print_json(&diagnostics)?;
    } else {
        print_diagnostics(&diagnostics, ctx.top);
        println!();
        println!("Type a guess, 'reset' for a new word, or 'quit'.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut total_reward = 0.0;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "reset" => {
                total_reward = 0.0;
                let (observation, diagnostics) = reset(ctx)?;
                if ctx.json {
                    print_json(&observation)?;
                    print_json(&diagnostics)?;
                } else {
                    println!("New word. {} possibilities.", observation.pool_size);
                    print_diagnostics(&diagnostics, ctx.top);
                }
                continue;
            }
            _ => {}
        }

        if ctx.session.status().map_or(false, Status::is_terminal) {
            println!("The game is over. Type 'reset' to play again.");
            continue;
        }

        let step = ctx.session.step(Some(input))?;
        total_reward += step.reward;
        if ctx.json {
            print_json(&step)?;
        } else {
            print_step(&step, ctx.top);
        }

        if step.terminated {
            report_end(&ctx.session, &step.observation, total_reward);
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn report_end(session: &Session, observation: &Observation, total_reward: f64) {
    println!();
    match observation.status {
        Status::Won => println!("🎉 Solved in {} guesses!", observation.valid_attempts),
        _ => {
            if let Some(target) = session.target() {
                println!("✗ Out of guesses. The word was {}.", target);
            }
        }
    }
    println!("Total reward: {:.3}", total_reward);
    println!("Type 'reset' to play again.");
}

fn run_auto(ctx: &mut Context, episodes: usize) -> Result<(), Error> {
    let max_calls = ctx.session.config().max_attempts;
    for _ in 0..episodes {
        let summary = match ctx.target {
            Some(target) => {
                play_target(&mut ctx.session, target, &mut EntropyGuesser, max_calls)?
            }
            None => play_episode(&mut ctx.session, &mut EntropyGuesser, max_calls)?,
        };
        if ctx.json {
            print_json(&summary)?;
            continue;
        }

        let target = summary.target.map(|w| w.to_string()).unwrap_or_default();
        println!("Target: {}", target);
        for (i, attempt) in ctx.session.history().iter().enumerate() {
            let guess = attempt.guess.as_deref().unwrap_or_default();
            match attempt.pattern {
                Some(pattern) => {
                    println!("Guess {}: {} → {}", i + 1, guess, pattern.to_emoji_string())
                }
                None => println!("Guess {}: {} (invalid)", i + 1, guess),
            }
        }
        println!(
            "{} in {} guesses, reward {:.3}",
            summary.status, summary.valid_attempts, summary.total_reward
        );
        println!();
    }
    Ok(())
}

fn run_suggest(ctx: &mut Context) -> Result<(), Error> {
    let ranking = ctx.session.opening_ranking();
    let top = &ranking[..ctx.top.min(ranking.len())];
    if ctx.json {
        return print_json(&top);
    }
    println!("Best opening guesses:");
    print_ranking(top, ctx.session.lists().answers().len());
    Ok(())
}

fn run_bench(ctx: &mut Context) -> Result<(), Error> {
    let max_attempts = ctx.session.config().max_attempts;
    let answers = ctx.session.lists().answers().to_vec();
    println!("Running benchmark on all {} answers...", answers.len());

    let start = Instant::now();
    let mut distribution = vec![0usize; max_attempts + 1];
    let mut failures = 0;
    for &target in &answers {
        let summary = play_target(&mut ctx.session, target, &mut EntropyGuesser, max_attempts)?;
        if summary.status == Status::Won {
            distribution[summary.valid_attempts] += 1;
        } else {
            failures += 1;
        }
    }
    let elapsed = start.elapsed();

    let total = answers.len();
    let solved: usize = distribution.iter().sum();
    let total_guesses: usize = distribution.iter().enumerate().map(|(g, c)| g * c).sum();

    println!();
    println!("Guess distribution:");
    for (guesses, &count) in distribution.iter().enumerate().filter(|(_, c)| **c > 0) {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    if solved > 0 {
        println!("Average guesses: {:.3}", total_guesses as f64 / solved as f64);
    }
    println!("Words not solved in {} guesses: {}", max_attempts, failures);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn run_assist(ctx: &mut Context) -> Result<(), Error> {
    let guesses = ctx.session.lists().guesses().to_vec();
    let mut pool = CandidatePool::new(ctx.session.lists().answers());
    let opening = ctx.session.opening_ranking();
    print_ranking(&opening[..ctx.top.min(opening.len())], pool.len());
    println!();
    println!("Enter '<guess> <feedback>' after each guess, e.g. 'crane bygbb'.");
    println!("Feedback uses g/y/b (or 2/1/0). Type 'quit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let (guess, feedback) = match (parts.next(), parts.next()) {
            (Some("quit" | "exit" | "q"), None) => break,
            (Some(guess), Some(feedback)) => (guess, feedback),
            (None, _) => continue,
            _ => {
                println!("Expected a guess and its feedback.");
                continue;
            }
        };

        let guess = match Word::parse(guess) {
            Ok(word) => word,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        let Some(pattern) = Pattern::parse(feedback) else {
            println!("Feedback must be five of g/y/b.");
            continue;
        };

        pool.narrow(guess, pattern);
        if pattern.is_win() {
            println!("🎉 Solved!");
            break;
        }
        match pool.len() {
            0 => {
                println!("No answers match that feedback. Check the input.");
                break;
            }
            1 => {
                println!("The answer is {}.", pool[0]);
                break;
            }
            n => {
                println!("{} possibilities remain.", n);
                let ranking = rank_guesses(&guesses, &pool);
                let top = &ranking[..ctx.top.min(ranking.len())];
                if ctx.json {
                    print_json(&top)?;
                } else {
                    print_ranking(top, n);
                }
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut ctx = load(&cli)?;
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(&mut ctx),
        Command::Auto { episodes } => run_auto(&mut ctx, episodes),
        Command::Suggest => run_suggest(&mut ctx),
        Command::Bench => run_bench(&mut ctx),
        Command::Assist => run_assist(&mut ctx),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
