//! Command execution.
//!
//! Each command resolves currencies through the registry it is given and
//! renders its result as text: a canonical money string, `none` for an
//! absent result, or plain metadata.

use coinage_core::currency::{CurrencyCatalog, CurrencyRegistry};
use coinage_core::{CurrencyUnit, Money, MoneyResult, MoneyUtils};
use coinage_shared::AppResult;
use tracing::debug;

use crate::cli::{BinaryArgs, Command};

/// Literal used on the command line for an absent value.
pub const ABSENT: &str = "none";

/// Runs one command and returns the text to print.
pub fn execute<C: CurrencyCatalog>(command: &Command, registry: &CurrencyRegistry<C>) -> AppResult<String> {
    debug!(?command, "Executing command");

    let output = match command {
        Command::Parse { money } => Money::parse_in(registry, money)?.to_string(),
        Command::Zero { code } => Money::zero(&CurrencyUnit::of_in(registry, code)?).to_string(),
        Command::Add(args) => {
            let (a, b) = operands(registry, args)?;
            render(MoneyUtils::add(a, b)?.as_ref())
        }
        Command::Subtract(args) => {
            let (a, b) = operands(registry, args)?;
            render(MoneyUtils::subtract(a, b)?.as_ref())
        }
        Command::Max(args) => {
            let (a, b) = operands(registry, args)?;
            render(MoneyUtils::max(a.as_ref(), b.as_ref())?)
        }
        Command::Min(args) => {
            let (a, b) = operands(registry, args)?;
            render(MoneyUtils::min(a.as_ref(), b.as_ref())?)
        }
        Command::IsZero { value } => MoneyUtils::is_zero(operand(registry, value)?.as_ref()).to_string(),
        Command::Total { values } => {
            let values = values
                .iter()
                .map(|value| operand(registry, value))
                .collect::<MoneyResult<Vec<_>>>()?;
            render(MoneyUtils::total(values)?.as_ref())
        }
        Command::Currency { code } => describe(&CurrencyUnit::of_in(registry, code)?),
        Command::Currencies => registry.codes().join("\n"),
    };

    Ok(output)
}

/// Parses an operand, treating `none` (any case) as absent.
fn operand<C: CurrencyCatalog>(registry: &CurrencyRegistry<C>, text: &str) -> MoneyResult<Option<Money>> {
    if text.eq_ignore_ascii_case(ABSENT) {
        return Ok(None);
    }
    Money::parse_in(registry, text).map(Some)
}

fn operands<C: CurrencyCatalog>(
    registry: &CurrencyRegistry<C>,
    args: &BinaryArgs,
) -> MoneyResult<(Option<Money>, Option<Money>)> {
    Ok((operand(registry, &args.a)?, operand(registry, &args.b)?))
}

fn render(money: Option<&Money>) -> String {
    money.map_or_else(|| ABSENT.to_string(), Money::to_string)
}

fn describe(currency: &CurrencyUnit) -> String {
    let numeric = currency.numeric3_code();
    let mut line = format!(
        "{} numeric={} decimal_places={}",
        currency.code(),
        if numeric.is_empty() { "-" } else { numeric.as_str() },
        currency.decimal_places()
    );
    if currency.is_pseudo_currency() {
        line.push_str(" pseudo");
    }
    line
}
