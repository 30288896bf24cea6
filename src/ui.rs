pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f0;
      --bg-2: #c9e4d6;
      --ink: #22302b;
      --muted: #5c6b65;
      --accent: #2e8b57;
      --danger: #c0392b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 44px rgba(34, 48, 43, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f6faf7 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 18px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .toolbar {
      display: flex;
      gap: 10px;
    }

    button {
      font: inherit;
      border: 1px solid #b9cbc2;
      background: #fff;
      color: var(--ink);
      border-radius: 10px;
      padding: 6px 12px;
      cursor: pointer;
    }

    button.primary {
      background: var(--accent);
      border-color: var(--accent);
      color: #fff;
    }

    button.danger {
      color: var(--danger);
    }

    .day {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    .day-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 16px 22px;
      cursor: pointer;
      user-select: none;
    }

    .day-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .chev {
      transition: transform 160ms ease;
    }

    .day.open .chev {
      transform: rotate(90deg);
    }

    .day-body {
      display: none;
      padding: 0 22px 18px;
    }

    .day.open .day-body {
      display: block;
    }

    .row {
      display: grid;
      grid-template-columns: 2fr repeat(4, 1fr) 1.6fr;
      gap: 8px;
      align-items: center;
      padding: 6px 0;
      border-bottom: 1px solid #e3ece7;
    }

    .row.head {
      font-weight: 600;
      color: var(--muted);
    }

    .row input {
      width: 100%;
      font: inherit;
      padding: 4px 6px;
      border: 1px solid #b9cbc2;
      border-radius: 8px;
    }

    .actions {
      display: flex;
      gap: 6px;
    }

    .empty {
      color: var(--muted);
      padding: 8px 0;
    }

    .add-row {
      margin-top: 10px;
    }

    .hidden {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Workout Tracker</h1>
    <div class="toolbar">
      <button id="expand-all" type="button">Expand all</button>
      <button id="collapse-all" type="button">Collapse all</button>
    </div>
    <div id="days"></div>
  </main>

  <script>
    const $ = (sel, el = document) => el.querySelector(sel);
    const $$ = (sel, el = document) => [...el.querySelectorAll(sel)];

    const request = async (method, path, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(path, options);
      const data = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error(data.error || `Request failed (${res.status})`);
      }
      return data;
    };

    const api = {
      days: () => request('GET', '/days'),
      exercises: (dayId) => request('GET', `/exercises?day_id=${encodeURIComponent(dayId)}`),
      create: (payload) => request('POST', '/exercises', payload),
      update: (id, patch) => request('PUT', `/exercises/${id}`, patch),
      remove: (id) => request('DELETE', `/exercises/${id}`)
    };

    const isIntIn = (value, min, max) => Number.isInteger(value) && value >= min && value <= max;

    // Mirrors the server rules; returns a message or null.
    const validate = (fields) => {
      if (!fields.name) return 'Enter exercise name';
      if (!isIntIn(fields.sets, 1, 10)) return 'Sets must be 1-10';
      if (!isIntIn(fields.reps, 1, 20)) return 'Reps must be 1-20';
      if (!isIntIn(fields.weight_lbs, 0, Infinity)) return 'Weight must be a whole number >= 0';
      if (!isIntIn(fields.rest_seconds, 0, Infinity)) return 'Rest must be a whole number >= 0';
      return null;
    };

    const readFields = (el) => ({
      name: $('.name', el).value.trim(),
      sets: Number($('.sets', el).value),
      reps: Number($('.reps', el).value),
      weight_lbs: Number($('.weight', el).value || 0),
      rest_seconds: Number($('.rest', el).value || 0)
    });

    const cell = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div;
    };

    const input = (cls, type, value, attrs = {}) => {
      const el = document.createElement('input');
      el.className = cls;
      el.type = type;
      el.value = value;
      Object.entries(attrs).forEach(([key, val]) => el.setAttribute(key, val));
      return el;
    };

    const button = (label, cls, onClick) => {
      const el = document.createElement('button');
      el.type = 'button';
      el.textContent = label;
      if (cls) el.className = cls;
      el.addEventListener('click', onClick);
      return el;
    };

    const fieldInputs = (values) => [
      input('name', 'text', values.name, { placeholder: 'Exercise name' }),
      input('sets', 'number', values.sets, { min: 1, max: 10, step: 1 }),
      input('reps', 'number', values.reps, { min: 1, max: 20, step: 1 }),
      input('weight', 'number', values.weight_lbs, { min: 0, step: 1 }),
      input('rest', 'number', values.rest_seconds, { min: 0, step: 5 })
    ];

    const renderExercise = (card, ex) => {
      const line = document.createElement('div');
      line.className = 'row';

      const showView = () => {
        line.replaceChildren(
          cell(ex.name),
          cell(ex.sets),
          cell(ex.reps),
          cell(ex.weight_lbs),
          cell(ex.rest_seconds)
        );
        const actions = document.createElement('div');
        actions.className = 'actions';
        actions.append(button('Edit', '', showEdit), button('Delete', 'danger', remove));
        line.append(actions);
      };

      // All five fields go out in one request; cancel discards everything.
      const showEdit = () => {
        line.replaceChildren(...fieldInputs(ex));
        const actions = document.createElement('div');
        actions.className = 'actions';
        actions.append(button('Save', 'primary', save), button('Cancel', '', showView));
        line.append(actions);
        $('.name', line).focus();
      };

      const save = async () => {
        const fields = readFields(line);
        const problem = validate(fields);
        if (problem) {
          alert(problem);
          return;
        }
        try {
          await api.update(ex.id, fields);
        } catch (err) {
          alert(err.message);
          return;
        }
        await reload(card);
      };

      const remove = async () => {
        if (!confirm(`Delete "${ex.name}"?`)) return;
        try {
          await api.remove(ex.id);
        } catch (err) {
          alert(err.message);
          return;
        }
        await reload(card);
      };

      showView();
      return line;
    };

    const reload = async (card) => {
      const rows = $('.rows', card);
      let exercises;
      try {
        exercises = await api.exercises(card.dataset.dayId);
      } catch (err) {
        alert(err.message);
        return;
      }
      rows.replaceChildren();
      if (!exercises.length) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = 'No exercises yet.';
        rows.append(empty);
      }
      exercises.forEach((ex) => rows.append(renderExercise(card, ex)));
      card.dataset.loaded = 'true';
    };

    const setOpen = (card, open) => {
      card.classList.toggle('open', open);
      $('.day-header', card).setAttribute('aria-expanded', String(open));
    };

    // Loads exercises once, on first expand.
    const expand = async (card) => {
      setOpen(card, true);
      if (!card.dataset.loaded && !card.dataset.loading) {
        card.dataset.loading = 'true';
        await reload(card);
        delete card.dataset.loading;
      }
    };

    const dayCard = (day) => {
      const card = document.createElement('section');
      card.className = 'day';
      card.dataset.dayId = day.id;

      const header = document.createElement('div');
      header.className = 'day-header';
      header.setAttribute('role', 'button');
      header.setAttribute('aria-expanded', 'false');
      const title = document.createElement('h2');
      title.textContent = day.name;
      const chev = document.createElement('span');
      chev.className = 'chev';
      chev.textContent = '>';
      header.append(title, chev);
      header.addEventListener('click', () => {
        if (card.classList.contains('open')) {
          setOpen(card, false);
        } else {
          expand(card);
        }
      });

      const body = document.createElement('div');
      body.className = 'day-body';

      const head = document.createElement('div');
      head.className = 'row head';
      ['Exercise', 'Sets', 'Reps', 'Weight (lb)', 'Rest (sec)', ''].forEach((label) => head.append(cell(label)));

      const rows = document.createElement('div');
      rows.className = 'rows';

      const addRow = document.createElement('div');
      addRow.className = 'row add-row hidden';
      const defaults = { name: '', sets: 3, reps: 10, weight_lbs: 0, rest_seconds: 90 };
      const resetAdd = () => {
        addRow.replaceChildren(...fieldInputs(defaults));
        const actions = document.createElement('div');
        actions.className = 'actions';
        actions.append(button('Save', 'primary', saveAdd), button('Cancel', '', hideAdd));
        addRow.append(actions);
      };

      const showAdd = button('Add exercise', 'primary add-toggle', () => {
        addRow.classList.remove('hidden');
        showAdd.classList.add('hidden');
        $('.name', addRow).focus();
      });

      const hideAdd = () => {
        addRow.classList.add('hidden');
        showAdd.classList.remove('hidden');
      };

      // On error the form keeps what the user typed.
      const saveAdd = async () => {
        const fields = readFields(addRow);
        const problem = validate(fields);
        if (problem) {
          alert(problem);
          return;
        }
        try {
          await api.create({ day_id: day.id, position: 0, ...fields });
        } catch (err) {
          alert(err.message);
          return;
        }
        resetAdd();
        hideAdd();
        await reload(card);
      };

      resetAdd();
      body.append(head, rows, addRow, showAdd);
      card.append(header, body);
      return card;
    };

    const init = async () => {
      const daysWrap = $('#days');
      let days;
      try {
        days = await api.days();
      } catch (err) {
        daysWrap.textContent = err.message;
        return;
      }
      daysWrap.replaceChildren(...days.map(dayCard));

      $('#expand-all').addEventListener('click', () => {
        $$('.day').forEach((card) => expand(card));
      });

      // Visual only; loaded rows stay in place.
      $('#collapse-all').addEventListener('click', () => {
        $$('.day').forEach((card) => setOpen(card, false));
      });
    };

    init();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_uses_relative_api_paths() {
        let html = render_index();
        assert!(html.contains("request('GET', '/days')"));
        assert!(html.contains("`/exercises/${id}`"));
        assert!(!html.contains("localhost:"));
    }
}
