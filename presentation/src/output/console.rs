//! Console output formatter for debates

use colored::{ColoredString, Colorize};
use debate_application::DebateDetail;
use debate_domain::{
    DebateMessage, DebatePromptTemplate, DebateSession, OutputFormat, Position, Role, Seating,
    TopicBrief, UserStats, Verdict, VerdictWinner,
};

/// Formats debates for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a finished debate in the requested format
    pub fn render(format: OutputFormat, detail: &DebateDetail, verdict: &Verdict) -> String {
        match format {
            OutputFormat::Full => Self::format_full(detail, verdict),
            OutputFormat::Verdict => Self::format_verdict(&detail.session, verdict),
            OutputFormat::Json => Self::format_json(detail, verdict),
        }
    }

    /// Banner shown when a debate starts
    pub fn format_created(session: &DebateSession, brief: Option<&TopicBrief>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Debate"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            session.topic()
        ));

        match session.seating() {
            Seating::HumanVsModel { human } => {
                output.push_str(&format!(
                    "{} {}   {} {}\n",
                    "You:".cyan().bold(),
                    Self::side(*human),
                    "Model:".cyan().bold(),
                    Self::side(human.opposite())
                ));
            }
            Seating::ModelVsModel => {
                output.push_str(&format!(
                    "{} {}   {} {}\n",
                    "AI-1:".cyan().bold(),
                    Self::side(Position::Pro),
                    "AI-2:".cyan().bold(),
                    Self::side(Position::Con)
                ));
            }
        }

        if let Some(brief) = brief {
            output.push_str(&format!("\n{} {}\n", "Pro:".green().bold(), brief.pro_position));
            output.push_str(&format!("{} {}\n", "Con:".red().bold(), brief.con_position));
            if !brief.background.trim().is_empty() {
                output.push_str(&format!("\n{}\n", brief.background.dimmed()));
            }
        }
        output
    }

    /// One transcript entry; the briefing and judge records are not shown
    pub fn format_message(seating: &Seating, message: &DebateMessage) -> Option<String> {
        let label = DebatePromptTemplate::speaker_label(seating, message.role)?;
        let heading = match seating.position_of(message.role) {
            Some(Position::Pro) => format!("── {} ──", label).green().bold(),
            Some(Position::Con) => format!("── {} ──", label).red().bold(),
            None => format!("── {} ──", label).bold(),
        };
        Some(format!("\n{}\n{}\n", heading, message.content))
    }

    pub fn format_transcript(detail: &DebateDetail) -> String {
        let seating = detail.session.seating();
        let mut output = Self::section_header("Transcript");
        let entries: Vec<String> = detail
            .messages
            .iter()
            .filter_map(|m| Self::format_message(seating, m))
            .collect();
        if entries.is_empty() {
            output.push_str(&format!("{}\n", "(no arguments yet)".dimmed()));
        }
        for entry in entries {
            output.push_str(&entry);
        }
        output
    }

    /// Verdict only (concise output)
    pub fn format_verdict(session: &DebateSession, verdict: &Verdict) -> String {
        let mut output = Self::section_header("Verdict");

        output.push_str(&format!(
            "{} {}\n",
            "Winner:".bold(),
            Self::winner_line(session.seating(), verdict.winner)
        ));
        output.push_str(&format!(
            "{} Pro {} / Con {}\n",
            "Score:".bold(),
            verdict.score.pro,
            verdict.score.con
        ));
        output.push_str(&format!("\n{}\n", verdict.reasoning));

        Self::push_points(&mut output, "Pro strengths:".green(), &verdict.pro_strengths);
        Self::push_points(&mut output, "Pro weaknesses:".yellow(), &verdict.pro_weaknesses);
        Self::push_points(&mut output, "Con strengths:".green(), &verdict.con_strengths);
        Self::push_points(&mut output, "Con weaknesses:".yellow(), &verdict.con_weaknesses);

        output.push_str(&format!("\n{}\n", verdict.final_comment.italic()));
        output
    }

    /// Banner, transcript and verdict
    pub fn format_full(detail: &DebateDetail, verdict: &Verdict) -> String {
        let mut output = Self::format_created(&detail.session, None);
        output.push_str(&Self::format_transcript(detail));
        output.push_str(&Self::format_verdict(&detail.session, verdict));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_json(detail: &DebateDetail, verdict: &Verdict) -> String {
        let value = serde_json::json!({
            "session": detail.session,
            "messages": detail.messages,
            "verdict": verdict,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_stats(stats: &UserStats) -> String {
        format!(
            "{} {} debates, {} won, {} lost, {} drawn (win rate {:.0}%)\n",
            "Your record:".cyan().bold(),
            stats.total_debates,
            stats.wins,
            stats.losses,
            stats.draws,
            stats.win_rate() * 100.0
        )
    }

    /// Past sessions, in the order given (newest first from the store)
    pub fn format_history(sessions: &[DebateSession]) -> String {
        let mut output = format!("{}\n", "History:".cyan().bold());
        if sessions.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for session in sessions {
            let result = match session.winner() {
                Some(winner) => winner.to_string(),
                None => session.status().to_string(),
            };
            output.push_str(&format!(
                "  #{} {} [{}] {}\n",
                session.id(),
                session.created_at().format("%Y-%m-%d %H:%M"),
                result,
                session.topic()
            ));
        }
        output
    }

    fn winner_line(seating: &Seating, winner: VerdictWinner) -> String {
        let position = match winner {
            VerdictWinner::Pro => Position::Pro,
            VerdictWinner::Con => Position::Con,
            VerdictWinner::Draw => return "Draw".yellow().bold().to_string(),
        };
        let role = seating.role_on(position);
        let who = DebatePromptTemplate::speaker_label(seating, role)
            .unwrap_or_else(|| position.label().to_string());
        match role {
            Role::Human => format!("{} {}", who.green().bold(), "(you win)".green()),
            Role::Model => format!("{} {}", who.red().bold(), "(the model wins)".red()),
            _ => who.bold().to_string(),
        }
    }

    fn side(position: Position) -> ColoredString {
        match position {
            Position::Pro => position.label().green().bold(),
            Position::Con => position.label().red().bold(),
        }
    }

    fn push_points(output: &mut String, title: ColoredString, points: &[String]) {
        if points.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title.bold()));
        for point in points {
            output.push_str(&format!("  * {}\n", point));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
