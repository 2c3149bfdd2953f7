//! Embedded HTML/CSS/JS for the coaching page.
//!
//! The entire page is compiled into the binary as a string constant and
//! stamped with the process-wide mode (demo vs. live) and the framework
//! options at render time. No external assets, no build tools, no CDN
//! dependencies.

use crate::domain::coaching::Framework;

/// Renders the coaching page.
///
/// `live` selects the credential status badge; everything else on the page
/// is fixed.
pub fn render(live: bool) -> String {
    let options = Framework::all()
        .iter()
        .map(|fw| format!(r#"<option value="{}">{}</option>"#, fw.as_str(), fw))
        .collect::<Vec<_>>()
        .join("\n        ");

    let badge = if live {
        r#"<span class="badge live">Live mode · connected</span>"#
    } else {
        r#"<span class="badge demo">Demo mode · no API key configured</span>"#
    };

    PAGE_TEMPLATE
        .replace("<!--FRAMEWORK_OPTIONS-->", &options)
        .replace("<!--MODE_BADGE-->", badge)
}

/// The complete page, minus the two render-time slots.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Kokoro Compass 🧭 | AI Executive Coach</title>
<style>
body {
  margin: 0;
  background-color: #f8f9fa;
  color: #212529;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  display: flex;
  min-height: 100vh;
}
.sidebar {
  width: 300px;
  background: #ffffff;
  border-right: 1px solid #dee2e6;
  padding: 25px;
}
.sidebar h1 { font-size: 1.4em; margin: 0; color: #003366; }
.sidebar .caption { color: #6c757d; font-size: 0.85em; }
.sidebar hr { border: none; border-top: 1px solid #dee2e6; margin: 20px 0; }
.main { flex: 1; padding: 30px 40px; max-width: 900px; }
.arabic {
  direction: rtl;
  font-family: 'Amiri', serif;
  color: #495057;
  font-size: 1.1em;
  margin-top: 10px;
}
.arabic-tagline {
  color: #003366;
  font-family: 'Amiri', serif;
  direction: rtl;
  font-size: 1.5em;
  margin-top: 5px;
  margin-bottom: 20px;
}
.badge {
  display: inline-block;
  padding: 4px 10px;
  border-radius: 12px;
  font-size: 0.8em;
  font-weight: bold;
}
.badge.live { background: #d1e7dd; color: #0f5132; }
.badge.demo { background: #fff3cd; color: #664d03; }
select, textarea {
  width: 100%;
  box-sizing: border-box;
  border: 1px solid #ced4da;
  border-radius: 5px;
  padding: 10px;
  font-size: 1em;
  font-family: inherit;
}
textarea { height: 180px; resize: vertical; }
button {
  background-color: #003366;
  color: white;
  border: none;
  border-radius: 5px;
  width: 100%;
  font-weight: bold;
  font-size: 1em;
  padding: 12px;
  margin-top: 15px;
  cursor: pointer;
}
button:disabled { opacity: 0.6; cursor: wait; }
.warning {
  display: none;
  background: #fff3cd;
  color: #664d03;
  border-radius: 5px;
  padding: 12px;
  margin-top: 15px;
}
.spinner {
  display: none;
  color: #6c757d;
  font-style: italic;
  margin-top: 15px;
}
.insight-card {
  display: none;
  background-color: white;
  padding: 25px;
  border-radius: 12px;
  box-shadow: 0 4px 15px rgba(0,0,0,0.1);
  margin-top: 25px;
  margin-bottom: 25px;
  border-left: 5px solid #003366;
  white-space: normal;
}
.chart-section { display: none; margin-bottom: 40px; }
.chart {
  display: flex;
  align-items: flex-end;
  gap: 40px;
  height: 220px;
  padding: 10px 20px;
  background: white;
  border-radius: 12px;
  box-shadow: 0 4px 15px rgba(0,0,0,0.1);
}
.bar-wrap { display: flex; flex-direction: column; align-items: center; flex: 1; height: 100%; justify-content: flex-end; }
.bar { width: 60px; background: #003366; border-radius: 4px 4px 0 0; }
.bar-label { margin-top: 8px; color: #495057; font-size: 0.9em; }
.bar-value { color: #003366; font-weight: bold; margin-bottom: 4px; }
.footer { color: #6c757d; font-size: 0.8em; border-top: 1px solid #dee2e6; margin-top: 40px; padding-top: 10px; }
</style>
</head>
<body>
<aside class="sidebar">
  <h1>🧭 Kokoro Compass</h1>
  <p class="caption">Navigating Leadership in the Technovate Era</p>
  <hr>
  <h3>ℹ️ About This Project</h3>
  <p><strong>Kokoro Compass</strong> is an AI-powered executive partner that transforms complex business challenges into <strong>clear strategic action</strong>.</p>
  <p>It is designed to support regional leaders in achieving <strong>Oman Vision 2040</strong> goals by embedding AI wisdom into daily decision-making.</p>
  <p class="arabic"><strong>مُوَجِّهك الاستراتيجي الذكي لاتخاذ القرارات الحاسمة.</strong></p>
  <hr>
  <h3>Coach Configuration</h3>
  <label for="framework">Consulting Framework:</label>
  <select id="framework">
        <!--FRAMEWORK_OPTIONS-->
  </select>
  <p><!--MODE_BADGE--></p>
</aside>
<main class="main">
  <h2>AI Executive Coach</h2>
  <p><strong>Smart Advisor using Methodology: <span id="methodology-label"></span></strong></p>
  <p class="arabic-tagline">مستشارك الاستراتيجي الذكي لاتخاذ القرارات</p>
  <hr>
  <label for="challenge">Describe your Management Challenge:</label>
  <textarea id="challenge" placeholder="Example (Oman Scenario): I'm the operations manager at Sohar Port. Cargo clearance takes a full day while the global standard is 8 hours. My team is demotivated, and productivity is low. How should I approach this using the GLOBIS method?"></textarea>
  <button id="submit">Get Consultation &amp; Action Plan</button>
  <div id="warning" class="warning"></div>
  <div id="spinner" class="spinner">Analyzing data and aligning with C-level management frameworks...</div>
  <div id="insight" class="insight-card"></div>
  <section id="chart-section" class="chart-section">
    <h3 id="chart-title"></h3>
    <div id="chart" class="chart"></div>
  </section>
  <div class="footer">© 2025 Kokoro Compass | Developed for the GLOBIS Technovate Era Event.</div>
</main>
<script>
const frameworkSelect = document.getElementById('framework');
const methodologyLabel = document.getElementById('methodology-label');
const challengeInput = document.getElementById('challenge');
const submitButton = document.getElementById('submit');
const warningBox = document.getElementById('warning');
const spinnerBox = document.getElementById('spinner');
const insightCard = document.getElementById('insight');
const chartSection = document.getElementById('chart-section');

function syncMethodologyLabel() {
  methodologyLabel.textContent = frameworkSelect.options[frameworkSelect.selectedIndex].text;
}
frameworkSelect.addEventListener('change', syncMethodologyLabel);
syncMethodologyLabel();

// Minimal Markdown rendering: headings, bold, italics, list items, quotes.
function renderMarkdown(text) {
  const escaped = text
    .replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');
  return escaped.split('\n').map(function (line) {
    if (line.startsWith('### ')) return '<h3>' + line.slice(4) + '</h3>';
    if (line.startsWith('&gt; ')) return '<blockquote>' + inline(line.slice(5)) + '</blockquote>';
    if (/^\s*[*-]\s+/.test(line)) return '<li>' + inline(line.replace(/^\s*[*-]\s+/, '')) + '</li>';
    if (/^\s*\d+\.\s+/.test(line)) return '<li>' + inline(line.replace(/^\s*\d+\.\s+/, '')) + '</li>';
    if (line.trim() === '') return '';
    return '<p>' + inline(line) + '</p>';
  }).join('');
  function inline(s) {
    return s
      .replace(/\*\*([^*]+)\*\*/g, '<strong>$1</strong>')
      .replace(/\*([^*]+)\*/g, '<em>$1</em>');
  }
}

function renderChart(chart) {
  document.getElementById('chart-title').textContent = chart.title;
  const max = Math.max.apply(null, chart.points.map(function (p) { return p.value; }));
  const chartBox = document.getElementById('chart');
  chartBox.innerHTML = '';
  chart.points.forEach(function (point) {
    const wrap = document.createElement('div');
    wrap.className = 'bar-wrap';
    const value = document.createElement('div');
    value.className = 'bar-value';
    value.textContent = point.value;
    const bar = document.createElement('div');
    bar.className = 'bar';
    bar.style.height = (point.value / max * 100) + '%';
    const label = document.createElement('div');
    label.className = 'bar-label';
    label.textContent = point.label;
    wrap.appendChild(value);
    wrap.appendChild(bar);
    wrap.appendChild(label);
    chartBox.appendChild(wrap);
  });
  chartSection.style.display = 'block';
}

// One submission at a time: the button stays disabled until the request
// completes or fails.
submitButton.addEventListener('click', async function () {
  warningBox.style.display = 'none';
  insightCard.style.display = 'none';
  chartSection.style.display = 'none';
  submitButton.disabled = true;
  spinnerBox.style.display = 'block';
  try {
    const response = await fetch('/api/consultations', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        framework: frameworkSelect.value,
        challenge: challengeInput.value
      })
    });
    const payload = await response.json();
    if (response.status === 422) {
      warningBox.textContent = payload.warning;
      warningBox.style.display = 'block';
      return;
    }
    insightCard.innerHTML = renderMarkdown(payload.body);
    insightCard.style.display = 'block';
    renderChart(payload.chart);
  } catch (err) {
    warningBox.textContent = 'Something went wrong — please try again.';
    warningBox.style.display = 'block';
  } finally {
    spinnerBox.style.display = 'none';
    submitButton.disabled = false;
  }
});
</script>
</body>
</html>
"##;
