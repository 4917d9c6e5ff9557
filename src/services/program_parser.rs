// Program script parser
//
// Line-oriented grammar:
//   // <Exercise> 1RM: <N>(lb|kg)     header comment, before the first exercise line
//   // <Exercise> SW: <N>(lb|kg)      header comment, before the first exercise line
//   ## <label>                        opens a new session
//   <Exercise> / <set-spec>[, ...]    exercise line (exactly one '/')
// Everything else is skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::set_spec::{parse_set_list, SetSpec};
use super::weight_resolver::{to_pounds, RequiredMaxima};
use crate::errors::{MaximumKind, MissingMaximum, ParseError, ParseResult};
use crate::models::{ExerciseLookup, PlannedEntry, WeightUnit};

static HEADER_COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^//\s*(.+?)\s+(1RM|SW)\s*:\s*(\d+(?:\.\d+)?)\s*(lbs?|kgs?)\s*$")
        .expect("header comment pattern is valid")
});

/// Comment attached to sets performed to failure
pub const AMRAP_COMMENT: &str = "AMRAP";

#[derive(Debug, Clone, PartialEq)]
enum ScriptLine {
    SessionHeader,
    Exercise { name: String, specs: Vec<SetSpec> },
}

/// Parser state for one `parse` call. Built fresh per call and passed from
/// cycle to cycle by value; nothing survives the call.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseContext {
    pub maxima: RequiredMaxima,
    /// 0-based index of the cycle about to be expanded
    pub cycle_index: u32,
    /// Number the next opened session will receive
    pub next_session: u32,
}

impl ParseContext {
    pub fn new(maxima: RequiredMaxima, first_session: u32) -> Self {
        Self {
            maxima,
            cycle_index: 0,
            next_session: first_session,
        }
    }

    fn advance(self, next_session: u32) -> Self {
        Self {
            cycle_index: self.cycle_index + 1,
            next_session,
            ..self
        }
    }
}

/// Parses program scripts into planned entries, tagging each entry with the
/// category reported by the exercise lookup.
pub struct ProgramParser<L> {
    lookup: L,
}

impl<L: ExerciseLookup> ProgramParser<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Parse `script` and repeat it `num_cycles` times, numbering sessions from 1
    pub fn parse(&self, script: &str, num_cycles: u32) -> ParseResult<Vec<PlannedEntry>> {
        self.parse_from_session(script, num_cycles, 1)
    }

    /// Same as [`ProgramParser::parse`] with sessions numbered from `first_session`
    pub fn parse_from_session(
        &self,
        script: &str,
        num_cycles: u32,
        first_session: u32,
    ) -> ParseResult<Vec<PlannedEntry>> {
        if num_cycles == 0 {
            return Err(ParseError::InvalidCycleCount);
        }

        let (maxima, lines) = read_script(script)?;
        validate_required_maxima(&lines, &maxima)?;

        let mut context = ParseContext::new(maxima, first_session.max(1));
        let mut entries = Vec::new();

        for _ in 0..num_cycles {
            let (cycle_entries, next) = self.expand_cycle(&lines, context)?;
            debug!(
                cycle = next.cycle_index - 1,
                entries = cycle_entries.len(),
                "Expanded program cycle"
            );
            entries.extend(cycle_entries);
            context = next;
        }

        info!(
            entries = entries.len(),
            cycles = num_cycles,
            "Parsed program script"
        );
        Ok(entries)
    }

    fn expand_cycle(
        &self,
        lines: &[ScriptLine],
        context: ParseContext,
    ) -> ParseResult<(Vec<PlannedEntry>, ParseContext)> {
        let mut entries = Vec::new();
        let mut next_session = context.next_session;
        // Session number of the open session, assigned on its first entry.
        // Exercise lines before the first `##` header open one implicitly
        // rather than being rejected.
        let mut open_session: Option<u32> = None;

        for line in lines {
            let (name, specs) = match line {
                ScriptLine::SessionHeader => {
                    open_session = None;
                    continue;
                }
                ScriptLine::Exercise { name, specs } => (name, specs),
            };

            if specs.iter().all(|spec| spec.sets == 0) {
                continue;
            }

            let session = *open_session.get_or_insert_with(|| {
                let number = next_session;
                next_session += 1;
                number
            });
            let category = self.lookup.category_for(name);

            for spec in specs {
                let weight = spec
                    .load
                    .map(|load| load.resolve(name, &context.maxima, context.cycle_index))
                    .transpose()?;

                for reps in spec.expand() {
                    let mut entry = PlannedEntry::new(session, name.as_str(), category.as_str())
                        .with_reps(reps);
                    entry.weight = weight;
                    if reps.is_amrap() {
                        entry.comment = Some(AMRAP_COMMENT.to_string());
                    }
                    entries.push(entry);
                }
            }
        }

        Ok((entries, context.advance(next_session)))
    }
}

/// Parse a script with an explicit exercise lookup
pub fn parse_program(
    script: &str,
    num_cycles: u32,
    lookup: &impl ExerciseLookup,
) -> ParseResult<Vec<PlannedEntry>> {
    ProgramParser::new(lookup).parse(script, num_cycles)
}

/// Split a script into header maxima and meaningful lines
fn read_script(script: &str) -> ParseResult<(RequiredMaxima, Vec<ScriptLine>)> {
    let mut maxima = RequiredMaxima::new();
    let mut lines = Vec::new();
    let mut seen_exercise = false;

    for raw in script.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("//") {
            if !seen_exercise {
                if let Some((exercise, kind, pounds)) = parse_header_comment(line) {
                    maxima.insert(exercise, kind, pounds);
                }
            }
            continue;
        }

        if line.starts_with("##") {
            lines.push(ScriptLine::SessionHeader);
            continue;
        }

        if line.matches('/').count() != 1 {
            continue;
        }

        let Some((name, set_list)) = line.split_once('/') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let specs = parse_set_list(set_list)
            .filter(|specs| !specs.is_empty())
            .ok_or_else(|| ParseError::InvalidSetSpec {
                line: line.to_string(),
            })?;

        seen_exercise = true;
        lines.push(ScriptLine::Exercise {
            name: name.to_string(),
            specs,
        });
    }

    Ok((maxima, lines))
}

fn parse_header_comment(line: &str) -> Option<(String, MaximumKind, f64)> {
    let caps = HEADER_COMMENT_PATTERN.captures(line)?;

    let kind = if caps[2].eq_ignore_ascii_case("1rm") {
        MaximumKind::OneRepMax
    } else {
        MaximumKind::StartingWeight
    };
    let value: f64 = caps[3].parse().ok()?;
    let unit = WeightUnit::from_suffix(&caps[4])?;

    Some((caps[1].trim().to_string(), kind, to_pounds(value, unit)))
}

/// Every percentage or progression load must have its header comment. All
/// offenders are reported together, in order of first use.
fn validate_required_maxima(lines: &[ScriptLine], maxima: &RequiredMaxima) -> ParseResult<()> {
    let mut missing: Vec<MissingMaximum> = Vec::new();

    for line in lines {
        let ScriptLine::Exercise { name, specs } = line else {
            continue;
        };

        for kind in specs.iter().filter_map(|s| s.load?.required_maximum()) {
            let already_reported = missing
                .iter()
                .any(|m| m.kind == kind && m.exercise == *name);
            if !maxima.contains(name, kind) && !already_reported {
                missing.push(MissingMaximum {
                    exercise: name.clone(),
                    kind,
                });
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ParseError::MissingRequiredComment { missing })
    }
}
