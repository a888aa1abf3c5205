use crate::models::StatsResponse;

pub fn render_index(stats: &StatsResponse) -> String {
    let average = stats
        .average_performance
        .map(|value| format!("{value}%"))
        .unwrap_or_else(|| "--".to_string());
    INDEX_HTML
        .replace("{{HABIT_COUNT}}", &stats.habit_count.to_string())
        .replace("{{TOTAL_STREAKS}}", &stats.total_streaks.to_string())
        .replace("{{AVG_RATE}}", &average)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitSync</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef0ff;
      --bg-2: #d8ccff;
      --ink: #1f2237;
      --accent: #6366f1;
      --accent-2: #8b5cf6;
      --danger: #f43f5e;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(79, 70, 229, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f3ecff 60%, #f7f4ff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5a5772;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(99, 102, 241, 0.1);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b86a0;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(99, 102, 241, 0.1);
    }

    #completion-chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    .habit-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .habit-card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(99, 102, 241, 0.1);
      display: grid;
      gap: 12px;
    }

    .habit-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-title {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .habit-icon {
      font-size: 1.4rem;
    }

    .habit-name {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .habit-target {
      color: #8b86a0;
      font-size: 0.85rem;
    }

    .habit-badges {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.85rem;
    }

    .badge {
      border-radius: 999px;
      padding: 4px 10px;
      font-weight: 600;
      background: rgba(99, 102, 241, 0.12);
      color: var(--accent);
    }

    .badge.streak {
      background: rgba(249, 115, 22, 0.14);
      color: #c2410c;
    }

    .habit-card svg {
      width: 100%;
      height: 90px;
      display: block;
    }

    .logger {
      display: grid;
      gap: 6px;
      background: rgba(99, 102, 241, 0.06);
      border-radius: 14px;
      padding: 12px;
    }

    .logger-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .logger input[type="range"] {
      flex: 1;
      accent-color: var(--accent);
    }

    .logger .current {
      font-weight: 600;
      min-width: 70px;
      text-align: right;
    }

    .logger .scale {
      display: flex;
      justify-content: space-between;
      font-size: 0.75rem;
      color: #8b86a0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: linear-gradient(120deg, var(--accent), var(--accent-2));
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
    }

    .btn-delete {
      background: transparent;
      color: var(--danger);
      padding: 6px 10px;
      font-size: 0.85rem;
    }

    .forms {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 16px;
    }

    form.card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(99, 102, 241, 0.1);
      display: grid;
      gap: 10px;
    }

    form.card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    input[type="text"], input[type="number"], select {
      border: 1px solid rgba(99, 102, 241, 0.25);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
      width: 100%;
    }

    .form-row {
      display: flex;
      gap: 10px;
    }

    .reminder-list {
      display: grid;
      gap: 10px;
    }

    .reminder {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      background: white;
      border-radius: 14px;
      padding: 12px 14px;
      border: 1px solid rgba(99, 102, 241, 0.1);
    }

    .reminder .meta {
      font-size: 0.85rem;
      color: #8b86a0;
    }

    .empty {
      color: #8b86a0;
      text-align: center;
      padding: 14px;
    }

    .chart-grid-line {
      stroke: rgba(99, 102, 241, 0.14);
    }

    .chart-label {
      fill: #8b86a0;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .target-line {
      stroke: rgba(31, 34, 55, 0.35);
      stroke-dasharray: 4 5;
    }

    .status {
      font-size: 0.95rem;
      color: #5a5772;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a83;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>HabitSync</h1>
      <p class="subtitle">Log your daily habits, keep streaks alive, and watch the week fill up.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Habits</span>
        <span id="habit-count" class="value">{{HABIT_COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Active streaks</span>
        <span id="total-streaks" class="value">{{TOTAL_STREAKS}}</span>
      </div>
      <div class="stat">
        <span class="label">Success rate</span>
        <span id="avg-rate" class="value">{{AVG_RATE}}</span>
      </div>
    </section>

    <section>
      <h2>Weekly completion</h2>
      <p class="subtitle">Share of habits on target, per day.</p>
      <div class="chart-card">
        <svg id="completion-chart" viewBox="0 0 600 220" role="img" aria-label="Weekly completion chart"></svg>
      </div>
    </section>

    <section>
      <h2>Your habits</h2>
      <div id="habits" class="habit-grid"></div>
    </section>

    <section class="forms">
      <form id="add-habit-form" class="card">
        <h3>Add a habit</h3>
        <input type="text" id="habit-name" placeholder="e.g. Meditation" />
        <div class="form-row">
          <input type="number" id="habit-goal" placeholder="Target, e.g. 20" step="any" min="0" />
          <input type="text" id="habit-unit" placeholder="Unit, e.g. minutes" />
        </div>
        <button class="btn-primary" type="submit">Add habit</button>
      </form>

      <form id="add-reminder-form" class="card">
        <h3>Add a reminder</h3>
        <select id="reminder-habit"></select>
        <input type="text" id="reminder-message" placeholder="e.g. Time to drink water!" />
        <input type="text" id="reminder-time" placeholder="e.g. 08:00 AM" />
        <button class="btn-primary" type="submit">Add reminder</button>
      </form>
    </section>

    <section>
      <h2>Reminders</h2>
      <div id="reminders" class="reminder-list"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Logging writes to the Sunday slot of a fixed Mon-Sun week. State lives in memory and resets on restart.</p>
  </main>

  <script>
    const habitsEl = document.getElementById('habits');
    const remindersEl = document.getElementById('reminders');
    const reminderHabitEl = document.getElementById('reminder-habit');
    const completionChartEl = document.getElementById('completion-chart');
    const habitCountEl = document.getElementById('habit-count');
    const totalStreaksEl = document.getElementById('total-streaks');
    const avgRateEl = document.getElementById('avg-rate');
    const statusEl = document.getElementById('status');

    let habits = [];
    let reminders = [];

    const icons = {
      moon: '\u{1F319}',
      droplet: '\u{1F4A7}',
      monitor: '\u{1F5A5}\u{FE0F}',
      activity: '\u{1F3C3}',
      check: '\u{2705}'
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>'"]/g, (c) => `&#${c.charCodeAt(0)};`);

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || `${method} ${url} failed`);
      }
      return res.status === 204 ? null : res.json();
    };

    const weekChart = (habit) => {
      const width = 280;
      const height = 90;
      const padding = 6;
      const labelSpace = 14;
      const max = Math.max(habit.target * 1.5, ...habit.data.map((d) => d.value), 1);
      const barSpan = (width - padding * 2) / habit.data.length;
      const barWidth = barSpan * 0.6;
      const scale = (height - labelSpace - padding) / max;

      const bars = habit.data
        .map((point, index) => {
          const barHeight = Math.max(point.value * scale, point.value > 0 ? 2 : 0);
          const x = padding + index * barSpan + (barSpan - barWidth) / 2;
          const y = height - labelSpace - barHeight;
          return `<rect x='${x.toFixed(1)}' y='${y.toFixed(1)}' width='${barWidth.toFixed(1)}' height='${barHeight.toFixed(1)}' rx='3' fill='${habit.color}' />`;
        })
        .join('');

      const labels = habit.data
        .map((point, index) => {
          const x = padding + index * barSpan + barSpan / 2;
          return `<text class='chart-label' x='${x.toFixed(1)}' y='${height - 2}' text-anchor='middle'>${point.day}</text>`;
        })
        .join('');

      const targetY = height - labelSpace - habit.target * scale;
      const target = `<line class='target-line' x1='${padding}' y1='${targetY.toFixed(1)}' x2='${width - padding}' y2='${targetY.toFixed(1)}' />`;

      return `<svg viewBox='0 0 ${width} ${height}'>${bars}${target}${labels}</svg>`;
    };

    const renderCompletionChart = (points) => {
      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 30;
      const top = 18;

      if (!points.length) {
        completionChartEl.innerHTML = `<text class='chart-label' x='50%' y='50%' text-anchor='middle'>No data yet</text>`;
        return;
      }

      const xStep = (width - paddingX * 2) / (points.length - 1);
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / 100) * (height - top - paddingY);

      let grid = '';
      for (let tick = 0; tick <= 100; tick += 25) {
        const yPos = y(tick);
        grid += `<line class='chart-grid-line' x1='${paddingX}' y1='${yPos.toFixed(1)}' x2='${width - paddingX}' y2='${yPos.toFixed(1)}' />`;
        grid += `<text class='chart-label' x='${paddingX - 10}' y='${(yPos + 4).toFixed(1)}' text-anchor='end'>${tick}%</text>`;
      }

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(1)} ${y(point.completion_rate).toFixed(1)}`)
        .join(' ');

      const circles = points
        .map((point, index) => `<circle cx='${x(index).toFixed(1)}' cy='${y(point.completion_rate).toFixed(1)}' r='4' fill='white' stroke='#6366f1' stroke-width='2' />`)
        .join('');

      const labels = points
        .map((point, index) => `<text class='chart-label' x='${x(index).toFixed(1)}' y='${height - 8}' text-anchor='middle'>${point.day}</text>`)
        .join('');

      completionChartEl.innerHTML = `
        ${grid}
        <path d='${path}' fill='none' stroke='#6366f1' stroke-width='3' />
        ${circles}
        ${labels}
      `;
    };

    const renderHabits = () => {
      if (!habits.length) {
        habitsEl.innerHTML = `<div class='empty'>No habits tracked yet. Add your first one below.</div>`;
        return;
      }

      habitsEl.innerHTML = habits
        .map((habit) => {
          const today = habit.data[6].value;
          const step = habit.unit === 'hours' ? 0.5 : 1;
          const max = habit.target * 2;
          const icon = icons[habit.icon] || icons.check;
          return `
            <div class='habit-card' data-id='${habit.id}'>
              <div class='habit-head'>
                <div class='habit-title'>
                  <span class='habit-icon'>${icon}</span>
                  <div>
                    <div class='habit-name'>${escapeHtml(habit.name)}</div>
                    <div class='habit-target'>Target: ${habit.target} ${escapeHtml(habit.unit)}</div>
                  </div>
                </div>
                <button class='btn-delete' data-action='delete-habit' data-id='${habit.id}' type='button'>Delete</button>
              </div>
              <div class='habit-badges'>
                <span class='badge'>${habit.performance}% success</span>
                <span class='badge streak'>${habit.streak} day streak</span>
              </div>
              ${weekChart(habit)}
              <div class='logger'>
                <div class='logger-row'>
                  <input type='range' min='0' max='${max}' step='${step}' value='${today}'
                    data-action='log' data-id='${habit.id}' aria-label='Log today' />
                  <span class='current'>${today} ${escapeHtml(habit.unit)}</span>
                </div>
                <div class='scale'><span>0</span><span>${habit.target}</span><span>${max}</span></div>
              </div>
            </div>
          `;
        })
        .join('');
    };

    const renderReminders = () => {
      if (!reminders.length) {
        remindersEl.innerHTML = `<div class='empty'>No reminders set.</div>`;
        return;
      }

      const nameOf = (habitId) => {
        const habit = habits.find((h) => h.id === habitId);
        return habit ? habit.name : `habit ${habitId}`;
      };

      remindersEl.innerHTML = reminders
        .map(
          (reminder) => `
            <div class='reminder'>
              <div>
                <div>${escapeHtml(reminder.message)}</div>
                <div class='meta'>${escapeHtml(reminder.time)} &middot; ${escapeHtml(nameOf(reminder.habit_id))}</div>
              </div>
              <button class='btn-delete' data-action='delete-reminder' data-id='${reminder.id}' type='button'>Remove</button>
            </div>
          `
        )
        .join('');
    };

    const renderHabitOptions = () => {
      reminderHabitEl.innerHTML = habits
        .map((habit) => `<option value='${habit.id}'>${escapeHtml(habit.name)}</option>`)
        .join('');
    };

    const renderSummary = (stats) => {
      habitCountEl.textContent = stats.habit_count;
      totalStreaksEl.textContent = stats.total_streaks;
      avgRateEl.textContent =
        stats.average_performance === null ? '--' : `${stats.average_performance}%`;
      renderCompletionChart(stats.daily_completion);
    };

    const refresh = async () => {
      const [habitData, reminderData, stats] = await Promise.all([
        request('GET', '/api/habits'),
        request('GET', '/api/reminders'),
        request('GET', '/api/stats')
      ]);
      habits = habitData;
      reminders = reminderData;
      renderHabits();
      renderReminders();
      renderHabitOptions();
      renderSummary(stats);
    };

    document.getElementById('add-habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = document.getElementById('habit-name').value;
      const target = parseFloat(document.getElementById('habit-goal').value);
      const unit = document.getElementById('habit-unit').value;
      request('POST', '/api/habits', {
        name,
        target: Number.isFinite(target) ? target : null,
        unit
      })
        .then(() => {
          event.target.reset();
          setStatus('Habit added', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-reminder-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const habitId = parseInt(reminderHabitEl.value, 10);
      const message = document.getElementById('reminder-message').value;
      const time = document.getElementById('reminder-time').value;
      request('POST', '/api/reminders', {
        habit_id: habitId,
        message,
        time: time || null
      })
        .then(() => {
          event.target.reset();
          setStatus('Reminder added', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.body.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const id = button.dataset.id;
      if (button.dataset.action === 'delete-habit') {
        request('DELETE', `/api/habits/${id}`)
          .then(() => {
            setStatus('Habit deleted', 'ok');
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      } else if (button.dataset.action === 'delete-reminder') {
        request('DELETE', `/api/reminders/${id}`)
          .then(() => {
            setStatus('Reminder removed', 'ok');
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.body.addEventListener('change', (event) => {
      const slider = event.target.closest(`input[data-action='log']`);
      if (!slider) {
        return;
      }
      const id = slider.dataset.id;
      const value = parseFloat(slider.value);
      request('POST', `/api/habits/${id}/log`, { value })
        .then(() => {
          setStatus('Logged', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
