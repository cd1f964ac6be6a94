//! Interactive acquisition of quantum numbers and the concept menu.
//!
//! All prompting goes through a [`Prompter`] so a session can be driven from
//! a terminal or from a scripted buffer. Bad input never escapes: malformed
//! text and out-of-range numbers are reported and asked for again.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::concepts::{Concept, FURTHER_READING};
use crate::error::Result;
use crate::physics::{parse_quantum_number, QuantumState, MAX_PRINCIPAL};
use crate::sampling::{ComparisonSet, MAX_COMPARISON_STATES};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `question` and read one line; `None` once input is exhausted.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_yes(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .ask(question)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }

    /// Offer explanations until the user types `none` or declines to continue.
    pub fn explore_concepts(&mut self) -> io::Result<()> {
        loop {
            self.say("\nWould you like to learn about any of these concepts?")?;
            for concept in Concept::ALL {
                self.say(&format!("{} - {}", concept.key(), concept.title()))?;
            }
            self.say("Enter A, B, C, or D to learn more, or type 'none' to continue.")?;

            let Some(choice) = self.ask("\nYour choice: ")? else {
                return Ok(());
            };
            if choice.eq_ignore_ascii_case("none") {
                return Ok(());
            }
            match Concept::from_key(&choice) {
                Some(concept) => {
                    debug!(key = %concept.key(), "showing explanation");
                    self.say(&format!("\n{}", concept.explanation()))?;
                    self.say(&format!("\nLearn more here: {}", concept.reference()))?;
                    if !self.ask_yes("\nWould you like to explore other topics? (yes/no): ")? {
                        return Ok(());
                    }
                }
                None => self.say("\nInvalid choice. Please enter A, B, C, D, or 'none'.")?,
            }
        }
    }

    /// Read one (n, l) pair, asking again until it is valid.
    fn acquire_state(&mut self, set: usize) -> Result<Option<QuantumState>> {
        loop {
            let Some(n_text) = self.ask(&format!(
                "\nEnter the principal quantum number n (positive integer) for set {set}: "
            ))?
            else {
                return Ok(None);
            };
            let n = match parse_quantum_number(&n_text) {
                Ok(n) => n,
                Err(err) => {
                    warn!(%err, "rejected principal quantum number");
                    self.say("\nInvalid input. Please enter integers only.")?;
                    continue;
                }
            };

            let Some(l_text) = self.ask(&format!(
                "Enter the azimuthal quantum number l (integer such that 0 <= l < n) for set {set}: "
            ))?
            else {
                return Ok(None);
            };
            let l = match parse_quantum_number(&l_text) {
                Ok(l) => l,
                Err(err) => {
                    warn!(%err, "rejected azimuthal quantum number");
                    self.say("\nInvalid input. Please enter integers only.")?;
                    continue;
                }
            };

            match QuantumState::new(n, l) {
                Ok(state) => {
                    self.say("\nGreat job inputting a correct value!")?;
                    return Ok(Some(state));
                }
                Err(err) => {
                    warn!(%err, "rejected quantum numbers");
                    self.say(&format!(
                        "\nInvalid quantum numbers. Ensure that n is a positive integer \
                         (at most {MAX_PRINCIPAL}) and 0 <= l < n."
                    ))?;
                }
            }
        }
    }

    /// Collect up to three states, stopping early when the user declines.
    pub fn acquire_comparison(&mut self) -> Result<ComparisonSet> {
        self.say("\n--- Quantum Number Input ---")?;
        let mut states = Vec::with_capacity(MAX_COMPARISON_STATES);
        for set in 1..=MAX_COMPARISON_STATES {
            match self.acquire_state(set)? {
                Some(state) => states.push(state),
                None => break,
            }
            if set < MAX_COMPARISON_STATES
                && !self.ask_yes("\nWould you like to enter another set for comparison? (yes/no): ")?
            {
                break;
            }
        }
        ComparisonSet::new(states)
    }

    pub fn show_further_reading(&mut self) -> io::Result<()> {
        self.say("\nFurther Reading and Resources on Quantum Mechanics:")?;
        for resource in FURTHER_READING {
            self.say(&format!("\n{} {}", resource.title, resource.url))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadialError;
    use std::io::Cursor;

    fn session(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn state(n: i64, l: i64) -> QuantumState {
        QuantumState::new(n, l).unwrap()
    }

    #[test]
    fn test_single_set_then_stop() {
        let mut p = session("2\n1\nno\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(2, 1)]);
        assert!(output(p).contains("Great job"));
    }

    #[test]
    fn test_three_sets_without_a_fourth_question() {
        let mut p = session("1\n0\nyes\n2\n0\nYES\n2\n1\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(1, 0), state(2, 0), state(2, 1)]);
        let text = output(p);
        assert_eq!(text.matches("another set for comparison").count(), 2);
    }

    #[test]
    fn test_malformed_and_invalid_input_are_retried() {
        let mut p = session("two\n2\nx\n2\n5\n3\n2\nno\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(3, 2)]);
        let text = output(p);
        assert_eq!(text.matches("integers only").count(), 2);
        assert_eq!(text.matches("Invalid quantum numbers").count(), 1);
    }

    #[test]
    fn test_out_of_range_integers_are_retried() {
        let mut p = session("5000000000\n0\n501\n3\n2\n1\nno\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(2, 1)]);
        let text = output(p);
        assert_eq!(text.matches("Invalid quantum numbers").count(), 2);
    }

    #[test]
    fn test_duplicate_states_are_allowed() {
        let mut p = session("2\n1\nyes\n2\n1\nno\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(2, 1), state(2, 1)]);
    }

    #[test]
    fn test_end_of_input_keeps_accepted_sets() {
        let mut p = session("3\n1\nyes\n4\n");
        let set = p.acquire_comparison().unwrap();
        assert_eq!(set.states(), &[state(3, 1)]);
    }

    #[test]
    fn test_end_of_input_before_any_set_is_an_error() {
        let mut p = session("");
        assert!(matches!(
            p.acquire_comparison(),
            Err(RadialError::EmptyComparison)
        ));
    }

    #[test]
    fn test_concept_menu_flow() {
        let mut p = session("q\nc\nyes\nA\nno\n");
        p.explore_concepts().unwrap();
        let text = output(p);
        assert!(text.contains("Invalid choice"));
        assert!(text.contains(Concept::RadialWavefunction.explanation()));
        assert!(text.contains(Concept::PrincipalQuantumNumber.reference()));
    }

    #[test]
    fn test_concept_menu_none_exits() {
        let mut p = session("none\n");
        p.explore_concepts().unwrap();
        let text = output(p);
        assert!(!text.contains("Learn more here"));
    }

    #[test]
    fn test_further_reading_lists_every_resource() {
        let mut p = session("");
        p.show_further_reading().unwrap();
        let text = output(p);
        for resource in FURTHER_READING {
            assert!(text.contains(resource.url));
        }
    }
}
