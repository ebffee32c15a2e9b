// Single-page front end served at "/". The page renders the report JSON
// returned by POST /api/analyze; charts arrive as data, not images, and
// are drawn client-side as inline SVG.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Gemini Pro Financial Decoder</title>
<style>
    body {
        margin: 0;
        font-family: 'Segoe UI', Tahoma, sans-serif;
        color: #e8e2f2;
        background: radial-gradient(#150050 20%, #000000 80%);
        background-attachment: fixed;
        min-height: 100vh;
    }
    .main-header {
        background: radial-gradient(#150050 75%, #000000 100%);
        padding: 2rem 1rem;
        border-radius: 10px;
        margin: 1rem auto 2rem;
        max-width: 1160px;
        text-align: center;
        color: white;
        box-shadow: 0 4px 15px rgba(255,255,255,0.3);
    }
    .main-header h1 { margin: 0 0 0.5rem; }
    .main-header p { margin: 0; opacity: 0.85; }
    .layout {
        display: flex;
        gap: 1.5rem;
        max-width: 1160px;
        margin: 0 auto;
        padding: 0 1rem 3rem;
        align-items: flex-start;
    }
    aside { width: 300px; flex-shrink: 0; }
    main { flex: 1; min-width: 0; }
    .upload-section {
        background: linear-gradient(135deg, #e4c0c0 0%, #FB2576 100%);
        padding: 1.5rem;
        border-radius: 15px;
        margin: 0 0 1rem;
        color: #2b0a3d;
        box-shadow: 0 4px 15px rgba(255,255,255,0.15);
    }
    .upload-section h3 { margin-top: 0; }
    .upload-section label {
        display: block;
        font-weight: bold;
        margin: 1rem 0 0.25rem;
    }
    .upload-section input[type=file] { width: 100%; }
    .options {
        background: rgba(0, 0, 0, 0.35);
        border-radius: 12px;
        padding: 1rem 1.5rem;
        margin-bottom: 1rem;
    }
    .options label { display: block; margin: 0.5rem 0; }
    .options select {
        width: 100%;
        padding: 0.4rem;
        border-radius: 4px;
        border: none;
    }
    button#analyze {
        width: 100%;
        background: linear-gradient(135deg, #0c31d4 0%, #150050 70%);
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 2px;
        font-weight: bold;
        font-size: 1.1rem;
        cursor: pointer;
        box-shadow: 0 4px 15px rgba(255,255,255,0.4);
        transition: all 0.3s ease;
    }
    button#analyze:hover:enabled {
        transform: translateY(-2px);
        box-shadow: 0 6px 20px rgba(0,0,0,0.3);
    }
    button#analyze:disabled { opacity: 0.6; cursor: wait; }
    .metric-card {
        background: linear-gradient(135deg, #3F0071 0%, #610094 100%);
        padding: 1.5rem;
        border-radius: 12px;
        margin: 1rem 0;
        color: white;
        box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        border-left: 5px solid #fff;
    }
    .metric-card h3 { margin: 0 0 0.5rem; }
    .metric-card p { margin: 0; }
    .summary-card {
        background: radial-gradient(circle at 20% 20%, #dba6f3 5%, #3F0071 40%);
        padding: 1.5rem;
        border-radius: 12px;
        margin: 1rem 0;
        color: white;
        box-shadow: 0 4px 15px rgba(0,0,0,0.2);
    }
    .summary-card h4 { margin-top: 0; }
    .summary-card .insight { white-space: pre-wrap; }
    .error-message {
        background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%);
        padding: 1rem;
        border-radius: 10px;
        border-left: 5px solid #ff6b6b;
        color: #721c24;
        margin: 1rem 0;
    }
    .success-message {
        background: linear-gradient(135deg, #a8e6cf 0%, #dcedc1 100%);
        padding: 1rem;
        border-radius: 10px;
        border-left: 5px solid #28a745;
        color: #155724;
        margin: 1rem 0;
    }
    .error-message h4, .success-message h4 { margin: 0 0 0.4rem; }
    details.data-table {
        border-radius: 10px;
        overflow: hidden;
        background: rgba(0, 0, 0, 0.35);
        margin: 1rem 0;
        box-shadow: 0 4px 15px rgba(0,0,0,0.1);
    }
    details.data-table summary { padding: 0.75rem 1rem; cursor: pointer; }
    details.data-table .scroll { max-height: 320px; overflow: auto; }
    table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
    th, td {
        padding: 0.4rem 0.7rem;
        border-bottom: 1px solid rgba(255,255,255,0.15);
        text-align: left;
        white-space: nowrap;
    }
    th { background: rgba(63, 0, 113, 0.8); position: sticky; top: 0; }
    .charts { display: flex; flex-wrap: wrap; gap: 1rem; }
    .chart {
        background: rgba(0, 0, 0, 0.35);
        border-radius: 12px;
        padding: 1rem;
        flex: 1 1 420px;
    }
    .chart h4 { margin: 0 0 0.5rem; }
    .metrics { display: flex; gap: 1rem; flex-wrap: wrap; }
    .metric {
        flex: 1;
        min-width: 140px;
        background: rgba(0, 0, 0, 0.35);
        border-radius: 10px;
        padding: 1rem;
        text-align: center;
    }
    .metric .value { font-size: 1.8rem; font-weight: bold; }
    .metric .label { opacity: 0.8; font-size: 0.9rem; }
    hr.section { border: none; border-top: 1px solid rgba(255,255,255,0.2); margin: 2rem 0; }
</style>
</head>
<body>
<div class="main-header">
    <h1>Gemini Pro Financial Decoder</h1>
    <p>Advanced Financial Analysis with AI-Powered Insights</p>
</div>
<div class="layout">
    <aside>
        <div class="upload-section">
            <h3>Upload Financial Documents</h3>
            <p>Upload your financial statements in CSV or Excel format</p>
            <label for="balance-sheet">Balance Sheet</label>
            <input type="file" id="balance-sheet" accept=".csv,.xlsx,.xls">
            <label for="profit-loss">Profit &amp; Loss Statement</label>
            <input type="file" id="profit-loss" accept=".csv,.xlsx,.xls">
            <label for="cash-flow">Cash Flow Statement</label>
            <input type="file" id="cash-flow" accept=".csv,.xlsx,.xls">
        </div>
        <div class="options">
            <h3>Analysis Options</h3>
            <label><input type="checkbox" id="include-charts" checked> Include Detailed Charts</label>
            <label for="analysis-depth">Analysis Depth</label>
            <select id="analysis-depth">
                <option value="standard" selected>Standard</option>
                <option value="detailed">Detailed</option>
                <option value="executive_summary">Executive Summary</option>
            </select>
        </div>
        <button id="analyze">Generate Comprehensive Financial Analysis</button>
    </aside>
    <main>
        <div class="summary-card" id="welcome">
            <h3>Welcome to Financial Decoder</h3>
            <p>Upload your financial statements using the sidebar to get started with AI-powered analysis!</p>
            <ul>
                <li>Balance Sheet Analysis</li>
                <li>Profit &amp; Loss Insights</li>
                <li>Cash Flow Assessment</li>
                <li>Interactive Visualizations</li>
            </ul>
        </div>
        <div id="results"></div>
    </main>
</div>
<script>
'use strict';

const SLOTS = [
    { input: 'balance-sheet', kind: 'balance_sheet' },
    { input: 'profit-loss', kind: 'profit_loss' },
    { input: 'cash-flow', kind: 'cash_flow' },
];
const SERIES_COLORS = ['#dba6f3', '#FB2576', '#a8e6cf', '#e4c0c0', '#6d8dff'];

function esc(value) {
    return String(value)
        .replaceAll('&', '&amp;')
        .replaceAll('<', '&lt;')
        .replaceAll('>', '&gt;');
}

function fmt(value) {
    if (value === null || value === undefined) return '';
    if (typeof value !== 'number') return String(value);
    return Number.isInteger(value) ? String(value) : value.toFixed(2);
}

function readAsBase64(file) {
    return new Promise((resolve, reject) => {
        const reader = new FileReader();
        reader.onload = () => resolve(String(reader.result).split(',')[1] || '');
        reader.onerror = () => reject(reader.error);
        reader.readAsDataURL(file);
    });
}

async function collectFiles() {
    const files = {};
    for (const slot of SLOTS) {
        const input = document.getElementById(slot.input);
        if (input.files && input.files.length > 0) {
            const file = input.files[0];
            files[slot.kind] = {
                file_name: file.name,
                content: await readAsBase64(file),
            };
        }
    }
    return files;
}

function renderDataTable(section) {
    const table = section.table;
    const header = table.columns.map((c) => '<th>' + esc(c) + '</th>').join('');
    const body = table.rows
        .map((row) => '<tr>' + row.map((cell) => '<td>' + esc(fmt(cell)) + '</td>').join('') + '</tr>')
        .join('');
    return '<details class="data-table"><summary>View ' + esc(section.display_name) +
        ' Data Table</summary><div class="scroll"><table><thead><tr>' + header +
        '</tr></thead><tbody>' + body + '</tbody></table></div></details>';
}

function chartFrame(width, height) {
    return { width, height, left: 46, right: 12, top: 12, bottom: 24 };
}

function scale(value, min, max, from, to) {
    if (max === min) return (from + to) / 2;
    return from + ((value - min) / (max - min)) * (to - from);
}

function renderLineChart(chart) {
    const frame = chartFrame(520, 260);
    const rows = Math.max(...chart.series.map((s) => s.points.length), 1);
    const values = chart.series.flatMap((s) => s.points.filter((p) => p !== null));
    if (values.length === 0) return '';
    const min = Math.min(...values, 0);
    const max = Math.max(...values);

    let shapes = '';
    chart.series.forEach((series, idx) => {
        const color = SERIES_COLORS[idx % SERIES_COLORS.length];
        const points = [];
        series.points.forEach((p, row) => {
            if (p === null) return;
            const x = scale(row, 0, Math.max(rows - 1, 1), frame.left, frame.width - frame.right);
            const y = scale(p, min, max, frame.height - frame.bottom, frame.top);
            points.push(x.toFixed(1) + ',' + y.toFixed(1));
        });
        shapes += '<polyline fill="none" stroke="' + color + '" stroke-width="2" points="' +
            points.join(' ') + '"></polyline>';
    });

    const legend = chart.series
        .map((series, idx) =>
            '<span style="color:' + SERIES_COLORS[idx % SERIES_COLORS.length] + '">&#9632; ' +
            esc(series.name) + '</span>')
        .join(' ');
    const axisY = frame.height - frame.bottom;
    return '<div class="chart"><h4>' + esc(chart.title) + '</h4>' +
        '<svg viewBox="0 0 ' + frame.width + ' ' + frame.height + '" role="img">' +
        '<line x1="' + frame.left + '" y1="' + frame.top + '" x2="' + frame.left + '" y2="' + axisY +
        '" stroke="rgba(255,255,255,0.4)"></line>' +
        '<line x1="' + frame.left + '" y1="' + axisY + '" x2="' + (frame.width - frame.right) +
        '" y2="' + axisY + '" stroke="rgba(255,255,255,0.4)"></line>' +
        '<text x="4" y="' + (frame.top + 8) + '" fill="white" font-size="11">' + fmt(max) + '</text>' +
        '<text x="4" y="' + axisY + '" fill="white" font-size="11">' + fmt(min) + '</text>' +
        shapes + '</svg><div>' + legend + '</div></div>';
}

function renderBarChart(chart) {
    const frame = chartFrame(520, 260);
    const values = chart.values;
    const present = values.filter((v) => v !== null);
    if (present.length === 0) return '';
    const min = Math.min(...present, 0);
    const max = Math.max(...present, 0);
    const span = frame.width - frame.left - frame.right;
    const slot = span / values.length;
    const zeroY = scale(0, min, max, frame.height - frame.bottom, frame.top);

    let bars = '';
    values.forEach((value, idx) => {
        if (value === null) return;
        const x = frame.left + idx * slot + slot * 0.15;
        const y = scale(value, min, max, frame.height - frame.bottom, frame.top);
        const top = Math.min(y, zeroY);
        const height = Math.max(Math.abs(y - zeroY), 1);
        bars += '<rect x="' + x.toFixed(1) + '" y="' + top.toFixed(1) + '" width="' +
            (slot * 0.7).toFixed(1) + '" height="' + height.toFixed(1) +
            '" fill="#FB2576" opacity="0.85"></rect>';
    });

    const axisY = frame.height - frame.bottom;
    return '<div class="chart"><h4>' + esc(chart.title) + '</h4>' +
        '<svg viewBox="0 0 ' + frame.width + ' ' + frame.height + '" role="img">' +
        '<line x1="' + frame.left + '" y1="' + frame.top + '" x2="' + frame.left + '" y2="' + axisY +
        '" stroke="rgba(255,255,255,0.4)"></line>' +
        '<line x1="' + frame.left + '" y1="' + axisY + '" x2="' + (frame.width - frame.right) +
        '" y2="' + axisY + '" stroke="rgba(255,255,255,0.4)"></line>' +
        '<text x="4" y="' + (frame.top + 8) + '" fill="white" font-size="11">' + fmt(max) + '</text>' +
        '<text x="4" y="' + axisY + '" fill="white" font-size="11">' + fmt(min) + '</text>' +
        bars + '</svg><div>' + esc(chart.column) + '</div></div>';
}

function renderStats(stats) {
    if (!stats || stats.length === 0) return '';
    const keys = ['count', 'mean', 'std', 'min', '25%', '50%', '75%', 'max'];
    const header = '<th>column</th>' + keys.map((k) => '<th>' + esc(k) + '</th>').join('');
    const body = stats
        .map((row) =>
            '<tr><td>' + esc(row.column) + '</td>' +
            keys.map((k) => '<td>' + esc(fmt(row.stats[k])) + '</td>').join('') + '</tr>')
        .join('');
    return '<h3>Statistical Summary</h3><div class="data-table"><table><thead><tr>' + header +
        '</tr></thead><tbody>' + body + '</tbody></table></div>';
}

function renderCharts(charts) {
    if (!charts) return '';
    if (charts.note) return '<p>' + esc(charts.note) + '</p>';
    let html = '<div class="charts">';
    if (charts.line) html += renderLineChart(charts.line);
    if (charts.bar) html += renderBarChart(charts.bar);
    html += '</div>';
    html += renderStats(charts.stats);
    return html;
}

function renderSection(section) {
    let html = '<h2>' + esc(section.display_name) + ' Analysis</h2>';
    if (section.error) {
        html += '<div class="error-message"><h4>' + esc(section.file_name) + '</h4><p>' +
            esc(section.error) + '</p></div>';
        return html;
    }
    html += '<div class="summary-card"><h4>AI-Generated Insights</h4><div class="insight">' +
        esc(section.insight || '') + '</div></div>';
    if (section.table) {
        html += '<div class="metric-card"><h3>' + esc(section.display_name) + '</h3><p>Data Shape: ' +
            section.table.row_count + ' rows &times; ' + section.table.column_count +
            ' columns</p></div>';
        html += renderDataTable(section);
    }
    html += renderCharts(section.charts);
    html += '<hr class="section">';
    return html;
}

function renderExecutiveSummary(summary) {
    if (!summary) return '';
    return '<h2>Executive Summary</h2>' +
        '<div class="summary-card"><h4>Overall Financial Health</h4>' +
        '<p>Based on the uploaded financial statements, here is a comprehensive overview of the financial position.</p></div>' +
        '<div class="metrics">' +
        '<div class="metric"><div class="value">' + summary.documents_analyzed +
        '</div><div class="label">Documents Analyzed</div></div>' +
        '<div class="metric"><div class="value">' + summary.total_data_points.toLocaleString() +
        '</div><div class="label">Total Data Points</div></div>' +
        '<div class="metric"><div class="value">' + esc(summary.completion) +
        '</div><div class="label">Analysis Complete</div></div>' +
        '</div>';
}

function renderBanner(banner) {
    const cls = banner.status === 'success' ? 'success-message' : 'error-message';
    return '<div class="' + cls + '"><h4>' + esc(banner.title) + '</h4><p>' +
        esc(banner.message) + '</p></div>';
}

function renderReport(report) {
    let html = '';
    for (const section of report.sections) {
        html += renderSection(section);
    }
    html += renderExecutiveSummary(report.executive_summary);
    html += renderBanner(report.banner);
    return html;
}

async function runAnalysis() {
    const button = document.getElementById('analyze');
    const results = document.getElementById('results');
    const welcome = document.getElementById('welcome');

    const files = await collectFiles();
    if (Object.keys(files).length === 0) {
        results.innerHTML =
            '<div class="error-message"><p>Please upload at least one financial statement first.</p></div>';
        return;
    }

    const payload = {
        files,
        options: {
            include_charts: document.getElementById('include-charts').checked,
            analysis_depth: document.getElementById('analysis-depth').value,
        },
    };

    button.disabled = true;
    const originalLabel = button.textContent;
    button.textContent = 'Analyzing financial data and generating insights...';
    try {
        const response = await fetch('/api/analyze', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(payload),
        });
        if (!response.ok) {
            const text = await response.text();
            results.innerHTML = '<div class="error-message"><p>' + esc(text) + '</p></div>';
            return;
        }
        const report = await response.json();
        welcome.style.display = 'none';
        results.innerHTML = renderReport(report);
    } catch (err) {
        results.innerHTML = '<div class="error-message"><p>Request failed: ' +
            esc(err && err.message ? err.message : String(err)) + '</p></div>';
    } finally {
        button.disabled = false;
        button.textContent = originalLabel;
    }
}

document.getElementById('analyze').addEventListener('click', runAnalysis);
</script>
</body>
</html>
"##;
