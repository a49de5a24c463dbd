//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded by the app as a global script. Figures are built in
//! Rust (see `cbd-charts`), serialized to JSON and passed to `Plotly.react`,
//! so no chart logic lives on the JS side.

/// Plotly.js bundle loaded by the app shell.
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CBD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Polls made at 100 ms intervals before a chart script gives up.
pub const MAX_POLL_ATTEMPTS: u32 = 100;

/// Mark charts ready once Plotly.js has loaded. Call once at app startup.
pub fn init_charts() {
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__cbdChartsReady = true;
                    console.log('CBD charts initialized');
                }} else if (++attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(waitForPlotly);
                    console.warn('[CBD] Plotly.js did not load');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn render_script(container_id: &str, figure_json: &str) -> String {
    let id = js_string(container_id);
    let figure = js_string(figure_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__cbdChartsReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        var fig = JSON.parse({figure});
                        Plotly.react({id}, fig.data, fig.layout, {{responsive: true}});
                    }} catch(e) {{ console.error('[CBD] Plotly.react error:', e); }}
                }} else if (++attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.warn('[CBD] gave up rendering ' + {id});
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render a Plotly figure into the given container.
///
/// Polls until Plotly.js has loaded and the container DOM element exists,
/// giving up after [`MAX_POLL_ATTEMPTS`]. Re-rendering the same container
/// replaces the previous figure.
pub fn render_plotly(container_id: &str, figure_json: &str) {
    call_js(&render_script(container_id, figure_json));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "var el = document.getElementById({id}); if (el && typeof Plotly !== 'undefined') Plotly.purge(el);"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"x\"\n"), r#""it's \"x\"\n""#);
    }

    #[test]
    fn render_script_stops_polling_after_max_attempts() {
        let script = render_script("popular-stations-chart", "{}");
        assert!(script.contains(&format!("++attempts >= {MAX_POLL_ATTEMPTS}")));
        assert_eq!(script.matches("clearInterval(poll)").count(), 2);
        assert!(script.contains("document.getElementById(\"popular-stations-chart\")"));
    }
}
