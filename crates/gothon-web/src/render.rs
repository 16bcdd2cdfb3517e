//! HTML rendering of the room page.

use gothon_core::language::Language;
use gothon_game::application::query_handlers::RoomView;

struct Labels {
    title: &'static str,
    prompt: &'static str,
    submit: &'static str,
    play_again: &'static str,
    language_name: &'static str,
}

fn labels(lang: Language) -> Labels {
    match lang {
        Language::En => Labels {
            title: "Starship Survivor",
            prompt: "Your move",
            submit: "Go",
            play_again: "Play again",
            language_name: "English",
        },
        Language::Fr => Labels {
            title: "Survivant du vaisseau",
            prompt: "Ton action",
            submit: "Valider",
            play_again: "Rejouer",
            language_name: "Français",
        },
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The images, title and texts of the room.
fn scene(view: &RoomView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(media) = &view.media {
        lines.push(format!(
            r#"<img class="icon" src="{}" alt=""><img class="scene" src="{}" alt="">"#,
            escape(&media.icon),
            escape(&media.primary)
        ));
    }
    lines.push(format!("<h2>{}</h2>", escape(&view.name)));
    lines.push(format!(
        r#"<p class="description">{}</p>"#,
        escape(&view.description)
    ));
    if !view.complement.is_empty() {
        lines.push(format!(
            r#"<p class="complement">{}</p>"#,
            escape(&view.complement)
        ));
    }
    lines
}

/// What the player can do next: the action form, or a new game once the
/// room is terminal.
fn controls(view: &RoomView, labels: &Labels) -> Vec<String> {
    let lang = view.lang;
    if view.is_terminal {
        return vec![format!(
            r#"<p><a href="{}">{}</a></p>"#,
            lang.entry_path(),
            labels.play_again
        )];
    }

    let mut lines = Vec::new();
    if !view.choices.is_empty() {
        lines.push(format!(
            r#"<p class="choices">{}</p>"#,
            escape(&view.choices)
        ));
    }
    lines.push(format!(
        r#"<form action="{}" method="POST">
<label>{} <input type="text" name="action" autofocus autocomplete="off"></label>
<button type="submit">{}</button>
</form>"#,
        lang.game_path(),
        labels.prompt,
        labels.submit
    ));
    lines
}

/// Renders the full page for the player's current room.
///
/// Terminal rooms show their epilogue and a link starting a new game
/// instead of the action form.
#[must_use]
pub fn room_page(view: &RoomView) -> String {
    let lang = view.lang;
    let labels = labels(lang);
    let mut lines = scene(view);
    lines.extend(controls(view, &labels));
    let body = lines.join("\n");

    let switch: Vec<String> = Language::ALL
        .iter()
        .filter(|other| **other != lang)
        .map(|other| {
            format!(
                r#"<a href="{}" hreflang="{}">{}</a>"#,
                other.entry_path(),
                other.code(),
                self::labels(*other).language_name
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="{code}">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body data-room="{tag}">
<header><h1>{title}</h1><nav>{switch}</nav></header>
<main>
{body}
</main>
</body>
</html>
"#,
        code = lang.code(),
        title = labels.title,
        tag = escape(&view.tag),
        switch = switch.join(" "),
    )
}
