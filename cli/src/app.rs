//! Interactive controller.
//!
//! Translates line commands into session / adapter calls and renders the
//! results. All domain rules live behind those calls; this module only
//! wires events to operations and owns the status notices.

use std::io::Write;

use calc::CalcMode;
use dictation::VoiceInput;
use session::CalcSession;

use crate::cli::{Command, parse_command};
use crate::status::{NoticeLevel, StatusLine};

pub async fn run(mut session: CalcSession, voice: VoiceInput) -> anyhow::Result<()> {
    println!("pricecalc - type `help` for commands");

    let mut pricing_status = StatusLine::default();
    let mut discount_status = StatusLine::default();

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        render(&session, &mut pricing_status, &mut discount_status)?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse_command(input, session.tab()) {
            Ok(command) => command,
            Err(message) => {
                status_for(session.tab(), &mut pricing_status, &mut discount_status)
                    .error(message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),

            Command::SetPrice(value) => {
                match session.tab() {
                    CalcMode::UnitPrice => session.set_price(Some(value)),
                    CalcMode::Discount => session.set_discount_price(Some(value)),
                };
            }
            Command::SetVolume(value) => {
                session.set_volume(Some(value));
            }
            Command::SetRate(value) => {
                session.set_discount_rate(Some(value));
            }
            Command::SelectUnit(unit) => {
                session.select_unit(unit);
            }

            Command::SwitchTab(mode) => session.switch_tab(mode),

            Command::Confirm => {
                let status =
                    status_for(session.tab(), &mut pricing_status, &mut discount_status);
                match session.tab() {
                    CalcMode::UnitPrice => match session.confirm_pricing() {
                        Ok(record) => {
                            status.info(format!("added to history: {}", record.summary()))
                        }
                        Err(e) => status.error(e.to_string()),
                    },
                    CalcMode::Discount => match session.confirm_discount() {
                        Ok(record) => {
                            status.info(format!("added to history: {}", record.summary()))
                        }
                        Err(e) => status.error(e.to_string()),
                    },
                }
            }

            Command::Clear => {
                let tab = session.tab();
                session.clear(tab);
                status_for(tab, &mut pricing_status, &mut discount_status).clear();
            }

            Command::History => print_history(&session),

            Command::Export => match export_json(&session) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    status_for(session.tab(), &mut pricing_status, &mut discount_status)
                        .error(e.to_string())
                }
            },

            Command::Voice(target) => {
                println!("🎤 listening for {target}, type the transcript:");
                let status =
                    status_for(target.mode(), &mut pricing_status, &mut discount_status);
                match voice.capture(target).await {
                    Ok(captured) => {
                        dictation::route(&captured, &mut session);
                        status.info(format!("captured {}", captured.value));
                    }
                    Err(e) => status.error(e.to_string()),
                }
            }
        }
    }

    Ok(())
}

fn render(
    session: &CalcSession,
    pricing_status: &mut StatusLine,
    discount_status: &mut StatusLine,
) -> anyhow::Result<()> {
    match session.tab() {
        CalcMode::UnitPrice => {
            let inputs = session.pricing_inputs();
            println!(
                "[unit price] price={} volume={}{} → {} per {}",
                fmt_field(inputs.price),
                fmt_field(inputs.volume),
                inputs.unit.volume_suffix(),
                session.pricing_preview().display(2),
                inputs.unit,
            );
            print_notice(pricing_status);
        }
        CalcMode::Discount => {
            let inputs = session.discount_inputs();
            println!(
                "[discount] price={} rate={}% → {}",
                fmt_field(inputs.price),
                fmt_field(inputs.rate),
                session.discount_preview().display(0),
            );
            print_notice(discount_status);
        }
    }

    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_notice(status: &mut StatusLine) {
    if let Some(notice) = status.render() {
        let marker = match notice.level {
            NoticeLevel::Info => "✅",
            NoticeLevel::Error => "🚫",
        };
        println!("  {marker} {}", notice.text);
    }
}

fn print_history(session: &CalcSession) {
    match session.tab() {
        CalcMode::UnitPrice => {
            let history = session.pricing_history();
            if history.is_empty() {
                println!("  no history yet");
            }
            for (i, record) in history.iter().enumerate() {
                println!("  {}. {}", i + 1, record.summary());
            }
        }
        CalcMode::Discount => {
            let history = session.discount_history();
            if history.is_empty() {
                println!("  no history yet");
            }
            for (i, record) in history.iter().enumerate() {
                println!("  {}. {}", i + 1, record.summary());
            }
        }
    }
}

/// Both histories as one JSON document, newest first.
fn export_json(session: &CalcSession) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "unit_price": session.pricing_history(),
        "discount": session.discount_history(),
    }))
}

fn fmt_field(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "·".to_string(),
    }
}

fn status_for<'a>(
    mode: CalcMode,
    pricing: &'a mut StatusLine,
    discount: &'a mut StatusLine,
) -> &'a mut StatusLine {
    match mode {
        CalcMode::UnitPrice => pricing,
        CalcMode::Discount => discount,
    }
}

fn print_help() {
    println!("  tab <unitprice|discount>   switch calculator");
    println!("  price <n>                  set the price on the active tab");
    println!("  volume <n>                 set the package volume (unit price)");
    println!("  unit <100g|1kg|100ml|1L|100pc|1pc>");
    println!("  rate <n>                   set the discount rate in percent");
    println!("  voice <price|volume|rate>  dictate a value into a field");
    println!("  confirm                    save the current calculation");
    println!("  history                    show the saved calculations");
    println!("  export                     print both histories as JSON");
    println!("  clear                      reset the active tab's inputs");
    println!("  quit");
}
