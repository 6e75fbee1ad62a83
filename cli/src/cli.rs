use clap::Parser;

use calc::{CalcMode, Unit};
use dictation::InputTarget;

#[derive(Parser, Debug)]
#[command(
    name = "pricecalc",
    about = "Unit price and discount calculator with voice input"
)]
pub struct Cli {
    /// BCP-47 locale handed to the speech engine.
    #[arg(long, default_value = "ja-JP")]
    pub locale: String,

    /// Run without a speech capability (voice commands report it missing).
    #[arg(long)]
    pub no_voice: bool,
}

/// One line of user input, already bound to the active tab.
#[derive(Debug, PartialEq)]
pub enum Command {
    SetPrice(f64),
    SetVolume(f64),
    SetRate(f64),
    SelectUnit(Unit),
    Confirm,
    Clear,
    History,
    Export,
    SwitchTab(CalcMode),
    Voice(InputTarget),
    Help,
    Quit,
}

/// Parse one input line. `price` follows the active tab; `volume`, `unit`
/// and `rate` always belong to their own calculator.
pub fn parse_command(line: &str, tab: CalcMode) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("empty command".to_string());
    };
    let arg = words.next();

    match head {
        "price" => parse_number(arg).map(Command::SetPrice),
        "volume" => parse_number(arg).map(Command::SetVolume),
        "rate" => parse_number(arg).map(Command::SetRate),
        "unit" => {
            let label = arg.ok_or("usage: unit <100g|1kg|100ml|1L|100pc|1pc>")?;
            label
                .parse::<Unit>()
                .map(Command::SelectUnit)
                .map_err(|e| e.to_string())
        }
        "confirm" => Ok(Command::Confirm),
        "clear" => Ok(Command::Clear),
        "history" => Ok(Command::History),
        "export" => Ok(Command::Export),
        "tab" => {
            let name = arg.ok_or("usage: tab <unitprice|discount>")?;
            name.parse::<CalcMode>()
                .map(Command::SwitchTab)
                .map_err(|e| e.to_string())
        }
        "voice" => {
            let field = arg.ok_or("usage: voice <price|volume|rate>")?;
            voice_target(field, tab).map(Command::Voice)
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try help)")),
    }
}

fn parse_number(arg: Option<&str>) -> Result<f64, String> {
    let raw = arg.ok_or("expected a number")?;
    raw.parse::<f64>().map_err(|_| format!("not a number: {raw}"))
}

/// Map a field name to the dictation target, resolving `price` through the
/// active tab the way the on-screen buttons belong to one tab each.
fn voice_target(field: &str, tab: CalcMode) -> Result<InputTarget, String> {
    match (field, tab) {
        ("price", CalcMode::UnitPrice) => Ok(InputTarget::Price),
        ("price", CalcMode::Discount) => Ok(InputTarget::DiscountPrice),
        ("volume", _) => Ok(InputTarget::Volume),
        ("rate", _) => Ok(InputTarget::DiscountRate),
        (other, _) => Err(format!("no voice target for: {other}")),
    }
}
