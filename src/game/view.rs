//! HTML for the quiz.
//!
//! The session travels in hidden inputs; every button posts back to
//! `/game/{lang}` with an `action` of `guess`, `next` or `restart`.

use crate::content::{Language, LocalizedText};
use crate::game::quiz::{GuessOutcome, QuizBank, QuizSession};
use crate::render::markup::{escape_html, Markup};

struct GameText {
    intro: LocalizedText,
    question: LocalizedText,
    score: LocalizedText,
    correct: LocalizedText,
    wrong: LocalizedText,
    invalid: LocalizedText,
    next: LocalizedText,
    finished: LocalizedText,
    play_again: LocalizedText,
}

fn text() -> GameText {
    GameText {
        intro: LocalizedText::new(
            "Read the clue and pick the achievement it describes.",
            "اقرأ الدليل واختر الإنجاز الذي يصفه.",
        ),
        question: LocalizedText::new("Question", "السؤال"),
        score: LocalizedText::new("Score", "النتيجة"),
        correct: LocalizedText::new("Correct!", "إجابة صحيحة!"),
        wrong: LocalizedText::new("Not quite. The answer was:", "ليس تمامًا. الإجابة الصحيحة:"),
        invalid: LocalizedText::new("Please choose one of the options.", "يرجى اختيار أحد الخيارات."),
        next: LocalizedText::new("Next question", "السؤال التالي"),
        finished: LocalizedText::new("Final score", "النتيجة النهائية"),
        play_again: LocalizedText::new("Play again", "العب مرة أخرى"),
    }
}

/// The game as it looks before any interaction.
pub fn render_fresh(lang: Language) -> Markup {
    match QuizBank::shared() {
        Ok(bank) => render(&QuizSession::new(0), bank, lang, None),
        Err(e) => {
            tracing::error!("Quiz bank unavailable: {}", e);
            Markup::raw(r#"<div class="game" data-state="unavailable"></div>"#)
        }
    }
}

pub fn render(
    session: &QuizSession,
    bank: &QuizBank,
    lang: Language,
    outcome: Option<GuessOutcome>,
) -> Markup {
    let t = text();
    let total = bank.len();

    let Some(question) = session.current(bank) else {
        let mut html = Markup::raw(r#"<div class="game space-y-6" data-state="finished">"#);
        html.push_raw(&format!(
            r#"<p class="text-3xl font-black text-amber-500">{}: {}/{}</p>"#,
            escape_html(t.finished.get(lang)),
            session.score,
            total
        ));
        html.push(&action_form(session, lang, "restart", t.play_again.get(lang)));
        html.push_raw("</div>");
        return html;
    };

    let mut html = Markup::raw(format!(
        r#"<div class="game space-y-6" data-state="{}" data-question="{}">"#,
        if session.answered { "answered" } else { "playing" },
        escape_html(&question.id)
    ));
    html.push_raw(&format!(
        r#"<p class="text-amber-200">{}</p>"#,
        escape_html(t.intro.get(lang))
    ));
    html.push_raw(&format!(
        r#"<p class="text-sm text-amber-300">{} {}/{} · {}: {}</p>"#,
        escape_html(t.question.get(lang)),
        session.index + 1,
        total,
        escape_html(t.score.get(lang)),
        session.score
    ));
    html.push_raw(&format!(
        r#"<p class="text-2xl font-bold text-white">{}</p>"#,
        escape_html(question.clue.get(lang))
    ));

    html.push_raw(&format!(r#"<form method="post" action="/game/{}">"#, lang.code()));
    html.push(&hidden_state(session, "guess"));
    html.push_raw(r#"<div class="grid grid-cols-1 md:grid-cols-3 gap-4">"#);
    for (i, option) in question.options.iter().enumerate() {
        html.push_raw(&format!(
            r#"<button type="submit" name="choice" value="{}" class="bg-teal-800 p-4 rounded-lg border border-teal-700 hover:border-amber-500"{}>{}</button>"#,
            i,
            if session.answered { " disabled" } else { "" },
            escape_html(option.get(lang))
        ));
    }
    html.push_raw("</div></form>");

    match outcome {
        Some(GuessOutcome::Correct) => html.push_raw(&format!(
            r#"<p class="text-xl font-bold text-emerald-400" data-outcome="correct">{}</p>"#,
            escape_html(t.correct.get(lang))
        )),
        Some(GuessOutcome::Wrong { correct }) => {
            let answer = question
                .options
                .get(correct)
                .map(|o| o.get(lang))
                .unwrap_or_default();
            html.push_raw(&format!(
                r#"<p class="text-xl font-bold text-red-400" data-outcome="wrong">{} {}</p>"#,
                escape_html(t.wrong.get(lang)),
                escape_html(answer)
            ));
        }
        Some(GuessOutcome::Invalid) => html.push_raw(&format!(
            r#"<p class="text-amber-300" data-outcome="invalid">{}</p>"#,
            escape_html(t.invalid.get(lang))
        )),
        None => {}
    }

    if session.answered {
        html.push(&action_form(session, lang, "next", t.next.get(lang)));
    }

    html.push_raw("</div>");
    html
}

fn hidden_state(session: &QuizSession, action: &str) -> Markup {
    Markup::raw(format!(
        concat!(
            r#"<input type="hidden" name="seed" value="{}">"#,
            r#"<input type="hidden" name="index" value="{}">"#,
            r#"<input type="hidden" name="score" value="{}">"#,
            r#"<input type="hidden" name="answered" value="{}">"#,
            r#"<input type="hidden" name="action" value="{}">"#,
        ),
        session.seed, session.index, session.score, session.answered, action
    ))
}

fn action_form(session: &QuizSession, lang: Language, action: &str, label: &str) -> Markup {
    let mut html = Markup::raw(format!(r#"<form method="post" action="/game/{}">"#, lang.code()));
    html.push(&hidden_state(session, action));
    html.push_raw(&format!(
        r#"<button type="submit" class="bg-amber-500 text-teal-900 font-bold px-6 py-3 rounded-lg">{}</button></form>"#,
        escape_html(label)
    ));
    html
}
