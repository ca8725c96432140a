use crate::models::OverviewResponse;

pub fn render_index(overview: &OverviewResponse) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &overview.today)
        .replace("{{START}}", &overview.start_date)
        .replace("{{DAYS}}", &overview.days_passed.to_string())
        .replace("{{STREAK}}", &overview.current_streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f0;
      --bg-2: #cfe3d4;
      --ink: #26302a;
      --accent: #2d7a4b;
      --accent-2: #31475a;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(49, 71, 90, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2efe3 60%, #f1f5ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5d665f;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(49, 71, 90, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d877f;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.flame {
      color: var(--accent);
    }

    form.row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    input[type="text"], input[type="date"], select {
      flex: 1 1 180px;
      border: 1px solid rgba(49, 71, 90, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
    }

    input[type="range"] {
      flex: 1 1 180px;
      accent-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button.ghost {
      background: rgba(49, 71, 90, 0.08);
      color: var(--accent-2);
    }

    button.danger {
      background: var(--danger);
    }

    button.small {
      padding: 6px 14px;
      font-size: 0.85rem;
    }

    ul.items {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    ul.items li {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border: 1px solid rgba(49, 71, 90, 0.08);
      border-radius: 14px;
      padding: 10px 14px;
    }

    ul.items li .text {
      flex: 1;
    }

    ul.items li .text.done {
      text-decoration: line-through;
      color: #8b938c;
    }

    .badge {
      font-size: 0.75rem;
      font-weight: 600;
      border-radius: 999px;
      padding: 3px 10px;
      color: white;
    }

    .badge.High { background: var(--danger); }
    .badge.Medium { background: #c98a2b; }
    .badge.Low { background: var(--accent); }

    .empty {
      color: #7d877f;
      font-size: 0.95rem;
      padding: 8px 2px;
    }

    .segment {
      display: grid;
      gap: 8px;
      padding: 14px 0;
      border-top: 1px solid rgba(49, 71, 90, 0.08);
    }

    .segment header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    .segment .pct {
      font-size: 0.9rem;
      color: #5d665f;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(49, 71, 90, 0.08);
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .chart-bar {
      fill: var(--accent);
      opacity: 0.85;
    }

    .chart-grid {
      stroke: rgba(49, 71, 90, 0.12);
    }

    .chart-label {
      fill: #767f77;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7169;
      min-height: 1.2em;
    }

    .status[data-type="error"] { color: var(--danger); }
    .status[data-type="ok"] { color: var(--accent); }

    @media (max-width: 600px) {
      .app { padding: 28px 22px; }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Daily tasks, streaks and goals. Everything lives in one local file.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Today</span>
        <span id="today" class="value">{{TODAY}}</span>
      </div>
      <div class="stat">
        <span class="label">Challenge started</span>
        <span id="start-date" class="value">{{START}}</span>
      </div>
      <div class="stat">
        <span class="label">Days count</span>
        <span id="days-passed" class="value">{{DAYS}}</span>
      </div>
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="streak" class="value flame">{{STREAK}}</span>
      </div>
    </section>

    <section>
      <h2>Add a task</h2>
      <form id="task-form" class="row">
        <input type="text" id="task-name" placeholder="Task name" />
        <select id="task-priority">
          <option>High</option>
          <option>Medium</option>
          <option>Low</option>
        </select>
        <button type="submit">Add task</button>
      </form>
    </section>

    <section>
      <h2>Today's tasks</h2>
      <ul id="task-list" class="items"></ul>
      <div id="task-empty" class="empty" hidden>No tasks added for today yet.</div>
    </section>

    <section>
      <h2>Streak</h2>
      <form class="row" onsubmit="return false">
        <button type="button" class="ghost" id="reset-streak">Mark today incomplete</button>
        <button type="button" class="danger" id="break-streak">Break active streak</button>
      </form>
    </section>

    <section>
      <h2>Monthly completed days</h2>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 240" aria-label="Monthly completed days" role="img"></svg>
      </div>
    </section>

    <section>
      <h2>Goals</h2>
      <form id="goal-form" class="row">
        <select id="goal-segment">
          <option>Weekly</option>
          <option>Monthly</option>
          <option>3 Months</option>
          <option>6 Months</option>
        </select>
        <input type="text" id="goal-text" placeholder="Enter your goal" />
        <button type="submit">Add goal</button>
      </form>
      <div id="goal-segments"></div>
    </section>

    <section>
      <h2>Main goal</h2>
      <form id="main-goal-form" class="row">
        <input type="text" id="main-goal-text" placeholder="One goal that matters most" />
        <input type="range" id="main-goal-progress" min="0" max="100" value="0" />
        <span id="main-goal-pct">0%</span>
        <button type="submit">Save</button>
      </form>
    </section>

    <section>
      <h2>Start date</h2>
      <form id="start-form" class="row">
        <input type="date" id="start-input" />
        <button type="submit" class="ghost">Change start date</button>
      </form>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flash = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body || {})
    });

    const renderOverview = (data) => {
      document.getElementById('today').textContent = data.today;
      document.getElementById('start-date').textContent = data.start_date;
      document.getElementById('days-passed').textContent = data.days_passed;
      document.getElementById('streak').textContent = data.current_streak;
    };

    const renderTasks = (data) => {
      const list = document.getElementById('task-list');
      const empty = document.getElementById('task-empty');
      list.innerHTML = '';
      empty.hidden = data.tasks.length > 0;

      data.tasks.forEach((task, index) => {
        const item = document.createElement('li');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.done;
        checkbox.addEventListener('change', () => {
          post('/api/tasks/done', { index, done: checkbox.checked })
            .then((updated) => { renderTasks(updated); refreshStreak(); })
            .catch((err) => setStatus(err.message, 'error'));
        });

        const text = document.createElement('span');
        text.className = task.done ? 'text done' : 'text';
        text.textContent = task.task || '(unnamed task)';

        const badge = document.createElement('span');
        badge.className = 'badge ' + task.priority;
        badge.textContent = task.priority;

        const del = document.createElement('button');
        del.type = 'button';
        del.className = 'ghost small';
        del.textContent = 'Delete';
        del.addEventListener('click', () => {
          post('/api/tasks/delete', { index })
            .then((updated) => { renderTasks(updated); refreshStreak(); })
            .catch((err) => setStatus(err.message, 'error'));
        });

        item.append(checkbox, text, badge, del);
        list.appendChild(item);
      });
    };

    const renderChart = (data) => {
      const chart = document.getElementById('chart');
      const months = data.months;
      if (!months.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No streak data yet</text>';
        return;
      }

      const width = 600;
      const height = 240;
      const paddingX = 40;
      const paddingY = 34;
      const top = 20;
      const max = Math.max(1, ...months.map((m) => m.completed));
      const innerW = width - paddingX * 2;
      const innerH = height - top - paddingY;
      const slot = innerW / months.length;
      const barW = Math.min(46, slot * 0.6);

      let grid = '';
      const ticks = Math.min(4, max);
      for (let i = 0; i <= ticks; i += 1) {
        const value = Math.round((max * i) / ticks);
        const y = height - paddingY - (value / max) * innerH;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y}" x2="${width - paddingX}" y2="${y}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      const bars = months.map((m, i) => {
        const x = paddingX + slot * i + (slot - barW) / 2;
        const h = (m.completed / max) * innerH;
        const y = height - paddingY - h;
        return `<rect class="chart-bar" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barW.toFixed(1)}" height="${h.toFixed(1)}" rx="4" />`
          + `<text class="chart-label" x="${(x + barW / 2).toFixed(1)}" y="${height - paddingY + 16}" text-anchor="middle">${m.month}</text>`;
      }).join('');

      chart.innerHTML = grid + bars;
    };

    const renderGoals = (data) => {
      const host = document.getElementById('goal-segments');
      host.innerHTML = '';

      data.segments.forEach((segment) => {
        const box = document.createElement('div');
        box.className = 'segment';

        const header = document.createElement('header');
        const title = document.createElement('strong');
        title.textContent = segment.segment.replace(/_/g, ' ');
        const pct = document.createElement('span');
        pct.className = 'pct';
        pct.textContent = segment.total === 0
          ? 'no goals'
          : `${segment.done}/${segment.total} done (${segment.pct}%)`;
        header.append(title, pct);
        box.appendChild(header);

        if (!segment.goals.length) {
          const empty = document.createElement('div');
          empty.className = 'empty';
          empty.textContent = 'No goals added yet.';
          box.appendChild(empty);
        } else {
          const list = document.createElement('ul');
          list.className = 'items';
          segment.goals.forEach((goal, index) => {
            const item = document.createElement('li');

            const checkbox = document.createElement('input');
            checkbox.type = 'checkbox';
            checkbox.checked = goal.done;
            checkbox.addEventListener('change', () => {
              post('/api/goals/done', { segment: segment.segment, index, done: checkbox.checked })
                .then(renderGoals)
                .catch((err) => setStatus(err.message, 'error'));
            });

            const text = document.createElement('span');
            text.className = goal.done ? 'text done' : 'text';
            text.textContent = goal.goal || '(unnamed goal)';

            const del = document.createElement('button');
            del.type = 'button';
            del.className = 'ghost small';
            del.textContent = 'Delete';
            del.addEventListener('click', () => {
              post('/api/goals/delete', { segment: segment.segment, index })
                .then(renderGoals)
                .catch((err) => setStatus(err.message, 'error'));
            });

            item.append(checkbox, text, del);
            list.appendChild(item);
          });
          box.appendChild(list);
        }

        host.appendChild(box);
      });

      document.getElementById('main-goal-text').value = data.main_goal.goal;
      const slider = document.getElementById('main-goal-progress');
      slider.value = data.main_goal.progress;
      document.getElementById('main-goal-pct').textContent = data.main_goal.progress + '%';
    };

    const refreshStreak = () => Promise.all([
      api('/api/overview').then(renderOverview),
      api('/api/chart').then(renderChart)
    ]);

    const refresh = () => Promise.all([
      refreshStreak(),
      api('/api/tasks/today').then(renderTasks),
      api('/api/goals').then(renderGoals)
    ]);

    document.getElementById('task-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = document.getElementById('task-name').value;
      const priority = document.getElementById('task-priority').value;
      post('/api/tasks', { name, priority })
        .then((updated) => {
          document.getElementById('task-name').value = '';
          renderTasks(updated);
          refreshStreak();
          flash('Task added');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('goal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const segment = document.getElementById('goal-segment').value;
      const goal = document.getElementById('goal-text').value;
      post('/api/goals', { segment, goal })
        .then((updated) => {
          document.getElementById('goal-text').value = '';
          renderGoals(updated);
          flash('Goal added');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('main-goal-progress').addEventListener('input', (event) => {
      document.getElementById('main-goal-pct').textContent = event.target.value + '%';
    });

    document.getElementById('main-goal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const goal = document.getElementById('main-goal-text').value;
      const progress = Number(document.getElementById('main-goal-progress').value);
      post('/api/main-goal', { goal, progress })
        .then((updated) => { renderGoals(updated); flash('Main goal saved'); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('start-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const start_date = document.getElementById('start-input').value;
      post('/api/start-date', { start_date })
        .then((updated) => { renderOverview(updated); flash('Start date updated'); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-streak').addEventListener('click', () => {
      post('/api/streak/reset')
        .then((updated) => { renderOverview(updated); refreshStreak(); flash('Today marked incomplete'); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('break-streak').addEventListener('click', () => {
      post('/api/streak/break')
        .then((result) => {
          refreshStreak();
          if (result.broken) {
            flash('Streak broken at ' + result.date);
          } else {
            setStatus('Nothing to break', '');
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
