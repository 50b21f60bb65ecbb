use std::io::Write;

use crate::{
    classify::QuestionType,
    engine::{Answer, Explanation},
    error::Result,
};

/// Human-readable rendering of an answer.
pub fn render_answer(answer: &Answer) -> String {
    let mut out = format!("{}\n", answer.answer);
    out.push_str(&format!("\nconfidence: {:.2}\n", answer.confidence));
    if let Some(question_type) = answer.question_type {
        out.push_str(&format!("type: {question_type}\n"));
    }
    if let Some(ref method) = answer.method {
        out.push_str(&format!("method: {method}\n"));
    }
    out
}

/// Human-readable rendering of the `top` best windows.
pub fn render_explanation(explanation: &Explanation, top: usize) -> String {
    let mut out = format!(
        "type: {}\nexpanded: {}\n\n",
        explanation.question_type, explanation.expanded_question
    );

    let ranked = explanation.top(top);
    if ranked.is_empty() {
        out.push_str("No windows.\n");
        return out;
    }

    for (rank, w) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{:.3}] sentences {}-{}  \
             lexical={:.3} ngram={:.3} type={:.0}\n",
            rank + 1,
            w.blended,
            w.start,
            w.end,
            w.scores.lexical,
            w.scores.ngram,
            w.scores.type_boost,
        ));
        out.push_str(&format!("     {}\n", w.text));
    }
    out.push_str(&format!(
        "\n{} of {} window(s)\n",
        ranked.len(),
        explanation.windows.len()
    ));
    out
}

pub fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, answer)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_answer(answer))?;
    }
    Ok(())
}

pub fn print_explanation(
    explanation: &Explanation,
    top: usize,
    json: bool,
) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        let ranked = explanation.top(top);
        let value = serde_json::json!({
            "question_type": explanation.question_type,
            "expanded_question": explanation.expanded_question,
            "window_count": explanation.windows.len(),
            "windows": ranked,
        });
        serde_json::to_writer(&mut stdout, &value)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_explanation(explanation, top))?;
    }
    Ok(())
}

pub fn print_question_type(question_type: QuestionType) -> Result<()> {
    writeln!(std::io::stdout().lock(), "{question_type}")?;
    Ok(())
}
