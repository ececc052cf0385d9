//! Interactive prompt loop
//!
//! Reads weight and height, prints the result and a reference table, then
//! asks whether to go again. Generic over the input and output handles so it
//! can be driven from tests.

use std::io::{BufRead, Write};

use imc_core::{parse_decimal, Assessment, Calculator, Field, ImcError, Measurement};
use tracing::{debug, warn};

use crate::{CliError, Result};

const RULE_WIDTH: usize = 50;

const WEIGHT_PROMPT: &str = "📏 Digite seu peso em kg: ";
const HEIGHT_PROMPT: &str = "📐 Digite sua altura em metros (ex: 1.75): ";
const AGAIN_PROMPT: &str = "\n🔄 Deseja calcular outro IMC? (s/n): ";

const AFFIRMATIVE: [&str; 4] = ["s", "sim", "y", "yes"];
const NEGATIVE: [&str; 4] = ["n", "não", "nao", "no"];

/// Interpret a yes/no answer (case-insensitive).
///
/// Returns `None` for anything outside the accepted tokens.
pub fn parse_answer(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if AFFIRMATIVE.contains(&answer.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Terminal session bound to one calculator.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    calculator: &'a Calculator,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading from `input` and writing to `output`
    pub fn new(input: R, output: W, calculator: &'a Calculator) -> Self {
        Self {
            input,
            output,
            calculator,
        }
    }

    /// Run calculations until the user declines another one.
    ///
    /// # Errors
    /// - `CliError::Interrupted` when input ends
    /// - `CliError::InvalidInput` when the final calculation rejects the measurement
    /// - `CliError::Io` on terminal failures
    pub fn run(&mut self) -> Result<()> {
        let mut round = 0usize;
        loop {
            round += 1;
            debug!(round, "Starting calculation");

            let assessment = self.calculate_once()?;
            self.print_assessment(&assessment)?;

            if !self.ask_again()? {
                writeln!(self.output, "\n👋 Obrigado por usar a Calculadora de IMC!")?;
                writeln!(self.output, "💪 Mantenha-se saudável!")?;
                return Ok(());
            }
            writeln!(self.output, "\n{}", "=".repeat(RULE_WIDTH))?;
        }
    }

    fn calculate_once(&mut self) -> Result<Assessment> {
        self.print_banner()?;

        let weight = self.prompt_measurement(WEIGHT_PROMPT, Field::Weight)?;
        let height = self.prompt_measurement(HEIGHT_PROMPT, Field::Height)?;

        self.calculator.assess(weight, height).map_err(|err| {
            warn!(%err, weight, height, "Calculation rejected measurement");
            CliError::from(err)
        })
    }

    /// Prompt until the value parses and passes every range check.
    fn prompt_measurement(&mut self, prompt: &str, field: Field) -> Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_decimal(&line, field).and_then(|value| validate(field, value)) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, field = %field, "Rejected input");
                    writeln!(self.output, "❌ Erro: {}", err)?;
                    writeln!(self.output, "Tente novamente...\n")?;
                }
            }
        }
    }

    fn ask_again(&mut self) -> Result<bool> {
        loop {
            let line = self.read_line(AGAIN_PROMPT)?;
            match parse_answer(&line) {
                Some(again) => return Ok(again),
                None => writeln!(
                    self.output,
                    "❌ Por favor, responda 's' para sim ou 'n' para não"
                )?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "🏥 CALCULADORA DE IMC 🏥")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_assessment(&mut self, assessment: &Assessment) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "📊 RESULTADO DO SEU IMC")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "🎯 Seu IMC é: {}", assessment.index)?;
        writeln!(self.output, "📋 Classificação: {}", assessment.band)?;
        writeln!(self.output, "💡 Recomendação: {}", assessment.recommendation)?;
        writeln!(self.output, "{}", rule)?;

        writeln!(self.output, "\n📚 TABELA DE REFERÊNCIA (OMS):")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        for range in self.calculator.reference_table() {
            writeln!(self.output, "{:<16}→ {}", range.describe(), range.band)?;
        }
        Ok(())
    }
}

fn validate(field: Field, value: f64) -> std::result::Result<f64, ImcError> {
    match field {
        Field::Weight => Measurement::validate_weight(value),
        Field::Height => Measurement::validate_height(value),
    }
}
