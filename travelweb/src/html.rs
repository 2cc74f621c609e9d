//! HTML content helpers for the travelweb UI.
//!
//! Exports the static index page (`INDEX_PAGE`) and the `entry_page`
//! helper which wraps a rendered travel-entry fragment in a full page.
//! Keep large HTML blobs here to avoid runtime template dependencies.
//!
/// HTML page for the travel-log landing page with an entry preview form
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Travel Log</title>
    <style>
        :root {
            --bg-dark: #1a1a1a;
            --card-bg: #252526;
            --accent: #007acc;
            --text: #cccccc;
        }

        body {
            background: var(--bg-dark);
            color: var(--text);
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            display: flex;
            justify-content: center;
            margin: 0;
            padding: 40px 16px;
        }

        .card {
            background: var(--card-bg);
            border-radius: 12px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.5);
            padding: 2rem;
            width: 100%;
            max-width: 420px;
        }

        h1 { color: var(--accent); font-size: 1.4rem; margin-top: 0; }
        label { display: block; font-size: 0.8rem; margin-top: 12px; text-transform: uppercase; }
        input { width: 100%; padding: 10px; margin-top: 4px; border-radius: 6px; border: 1px solid #333; background: #1e1e1e; color: white; box-sizing: border-box; }
        button { width: 100%; padding: 12px; margin-top: 18px; background: var(--accent); border: none; color: white; border-radius: 6px; cursor: pointer; font-weight: bold; }
        button:hover { background: #0062a3; }
    </style>
</head>
<body>
    <div class="card">
        <h1>Travel Log</h1>
        <form action="/entry" method="GET">
            <label for="author">Author</label>
            <input type="text" id="author" name="author" placeholder="Jane">
            <label for="place">Place</label>
            <input type="text" id="place" name="place" placeholder="Lisbon">
            <label for="lat">Lat + Long</label>
            <input type="text" id="lat" name="lat" placeholder="38.7N,9.1W">
            <label for="link">Link</label>
            <input type="text" id="link" name="link" placeholder="http://x">
            <button type="submit">Preview entry</button>
        </form>
    </div>
</body>
</html>"#;

/// Wrap a rendered travel-entry fragment in a full page.
///
/// # Arguments
/// * `fragment` - The already-escaped HTML fragment from `TravelEntry::render`
pub fn entry_page(fragment: &str) -> String {
    format!(
        "<html><head><title>Travel Entry</title><style>
            body {{ background:#1a1a1a; color:#cccccc; font-family:'Segoe UI',sans-serif; display:flex; justify-content:center; padding:40px 16px; }}
            .travel-entry {{ background:#252526; border-radius:12px; padding:1.5rem 2rem; width:100%; max-width:420px; }}
            .divider {{ border:none; border-top:1px solid #333; margin-bottom:1rem; }}
            .label {{ color:#007acc; }}
            .travel-name, .travel-location, .travel-lat, .travel-link {{ margin:8px 0; }}
        </style></head><body>
{fragment}
</body></html>"
    )
}
