// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

/// Browser script driving the two dropdowns and the result box.
pub const MAIN_JS: &str = include_str!("../../static/js/main.js");

/// Render the home page with one `<option>` per animal.
pub fn index_page(animals: &[String]) -> String {
    let options: String = animals
        .iter()
        .map(|animal| {
            let escaped = escape_html(animal);
            format!("                <option value=\"{escaped}\">{escaped}</option>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Animal Calls</title>
    <style>
{css}
    </style>
</head>
<body>
    <main>
        <h1>Why do animals make that sound?</h1>
        <form id="animal-sound-form">
            <label for="animal-select">Animal</label>
            <select id="animal-select" name="animal">
                <option value="">-- Select an Animal --</option>
{options}            </select>

            <label for="sound-select">Sound</label>
            <select id="sound-select" name="sound" disabled>
                <option value="">Select an animal first</option>
            </select>

            <button type="submit">Find out</button>
        </form>
        <div id="result-display"></div>
    </main>
    <script src="/static/js/main.js"></script>
</body>
</html>"#,
        css = CSS,
        options = options,
    )
}

/// Escape text for use inside element content and quoted attributes.
fn escape_html(text: &str) -> String {
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

const CSS: &str = r#"
        body { font-family: system-ui, sans-serif; background: #f4f1ea; margin: 0; }
        main { max-width: 520px; margin: 48px auto; padding: 24px; background: #fff; border-radius: 8px; }
        h1 { font-size: 1.4rem; }
        form { display: flex; flex-direction: column; gap: 8px; }
        select, button { padding: 8px; font-size: 1rem; }
        #result-display { display: none; margin-top: 16px; padding: 12px; border-radius: 6px; background: #e8f5e9; }
        #result-display.result-visible { display: block; }
        #result-display.error { background: #fdecea; }
        #result-display.loading { background: #eef2f7; }
"#;
