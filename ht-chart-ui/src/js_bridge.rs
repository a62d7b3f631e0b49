//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Two external scripts are involved at runtime: D3.js (for the HRV trend
//! charts) and the Tableau Public embed bootstrap. Both go through
//! [`ensure_script_loaded`], which is keyed by URL and loads each script at
//! most once per process no matter how many containers or page remounts
//! request it.
//!
//! The chart renderer itself is bundled at compile time via `include_str!`
//! and evaluated at global scope once D3 is available.

// Embedded D3 chart source
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Append a `<script src=...>` tag to the document head, at most once per
/// URL for the lifetime of the page. Safe to call from every mount.
pub fn ensure_script_loaded(url: &str) {
    call_js(&format!(
        r#"
        (function() {{
            window.__htLoadedScripts = window.__htLoadedScripts || {{}};
            if (window.__htLoadedScripts['{url}']) return;
            window.__htLoadedScripts['{url}'] = true;
            var s = document.createElement('script');
            s.src = '{url}';
            s.async = true;
            document.head.appendChild(s);
        }})();
        "#,
    ));
}

/// Initialize the bundled chart script with a wait-for-D3 polling loop.
///
/// The chart source declares functions like `renderTrendChart(...)`. To make
/// them globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated via indirect eval at global scope once D3
/// is ready, then promoted to `window.*` explicitly. Guarded so repeat
/// mounts of the ECG page do not re-evaluate the scripts.
pub fn init_charts() {
    // Store the source on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__htChartsInit) {{ window.__htChartScripts = {}; }}",
        serde_json::to_string(TREND_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__htChartsInit) return;
            window.__htChartsInit = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__htChartScripts);
                    delete window.__htChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof destroyTrendChart !== 'undefined') window.destroyTrendChart = destroyTrendChart;
                    window.__htChartsReady = true;
                    console.log('HT charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a single-series trend chart (LF/HF ratio, average HR).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__htChartsReady &&
                    typeof window.renderTrendChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderTrendChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HT] renderTrendChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
