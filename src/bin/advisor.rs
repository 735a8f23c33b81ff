use blackjack_advisor::ingest::scan_text;
use blackjack_advisor::odds::{percent, signed};
use blackjack_advisor::strategy::COLUMN_LABELS;
use blackjack_advisor::{advise_manual, advise_table, Action, Advice, AdvisorError, TableCards, BASIC_STRATEGY};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "advisor",
    about = "Basic strategy advice and heuristic odds for a blackjack hand"
)]
struct Cli {
    /// Output format
    #[arg(long, env = "ADVISOR_OUTPUT", value_enum, default_value_t = Output::Text, global = true)]
    output: Output,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Advise on typed cards
    Advise {
        /// Player cards, comma separated (e.g. "10, 6" or "A♠,7")
        #[arg(long)]
        player: String,

        /// Dealer upcard
        #[arg(long)]
        dealer: String,
    },

    /// Advise on recognizer text; the last card found is the dealer upcard
    Scan {
        /// Raw text produced by a card recognizer
        #[arg(long)]
        text: String,
    },

    /// Print the hard, soft and pair charts
    Chart,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Advise { player, dealer } => advise_manual(&player, &dealer),
        Command::Scan { text } => {
            let table = TableCards::from_recognized(scan_text(&text));
            log::info!(
                "recognized {} player card(s), dealer {}",
                table.player.len(),
                table
                    .dealer
                    .map(|c| c.to_display())
                    .unwrap_or_else(|| "unknown".to_string())
            );
            advise_table(&table)
        }
        Command::Chart => {
            print_chart();
            return;
        }
    };

    match result {
        Ok(advice) => print_advice(&advice, cli.output),
        Err(e) => {
            eprintln!("Error: {e}");
            if let AdvisorError::IncompleteHand(_) = e {
                eprintln!("Enter the missing cards manually with `advisor advise`.");
            }
            std::process::exit(1);
        }
    }
}

fn print_advice(advice: &Advice, output: Output) {
    match output {
        Output::Json => match serde_json::to_string_pretty(advice) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to encode advice: {e}");
                std::process::exit(1);
            }
        },
        Output::Text => {
            println!("Action:      {}", advice.action);
            println!("Situation:   {}", advice.explanation());
            println!("Win:         {}", percent(advice.odds.win));
            println!("Push:        {}", percent(advice.odds.push));
            println!("Lose:        {}", percent(advice.odds.loss));
            println!("Dealer bust: {}", percent(advice.odds.dealer_bust));
            println!("Hit EV:      {}", signed(advice.ev.hit));
            println!("Stand EV:    {}", signed(advice.ev.stand));
            println!("Double EV:   {}", signed(advice.ev.double));
        }
    }
}

fn print_row(label: &str, row: &[Action; 10]) {
    let cells: Vec<String> = row.iter().map(|a| format!("{:>3}", a.code())).collect();
    println!("{label:>6} {}", cells.join(""));
}

fn print_chart() {
    let header: Vec<String> = COLUMN_LABELS.iter().map(|l| format!("{l:>3}")).collect();
    let header = header.join("");

    println!("Hard totals");
    println!("{:>6} {header}", "");
    for (total, row) in BASIC_STRATEGY.hard_rows() {
        print_row(&total.to_string(), row);
    }

    println!("\nSoft totals");
    println!("{:>6} {header}", "");
    for (total, row) in BASIC_STRATEGY.soft_rows() {
        print_row(&format!("A+{}", total - 11), row);
    }

    println!("\nPairs");
    println!("{:>6} {header}", "");
    for (rank, row) in BASIC_STRATEGY.pair_rows() {
        print_row(&format!("{rank},{rank}"), row);
    }
}
