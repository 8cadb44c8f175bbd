//! Quiz Runner entry point
//!
//! Browser build: Canvas2D drawing, DOM overlays, keyboard and audio around
//! the simulation. Native build: a headless autopilot run for smoke testing.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use quiz_runner::ContentPack;
use quiz_runner::sim::{GameEvent, Quiz};

/// One log line per interesting event, shared by both builds
fn log_event(pack: &ContentPack, quiz: &Quiz, event: &GameEvent) {
    match *event {
        GameEvent::ObstacleSpawned { id, kind } => {
            log::debug!("Spawned {} #{}", pack.label(kind), id);
        }
        GameEvent::QuizStarted { question } => {
            let prompt = quiz.question(question).map(|q| q.prompt.as_str()).unwrap_or("?");
            log::info!("Quiz: {}", prompt);
        }
        GameEvent::AnswerWrong { question, chosen } => {
            log::info!("Wrong answer {} to question {}", chosen + 1, question);
        }
        GameEvent::Died { hit } => {
            log::info!("Hit a {}: {}", pack.label(hit), pack.death_message(hit));
        }
        other => log::debug!("{:?}", other),
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement,
        KeyboardEvent,
    };

    use quiz_runner::audio::{AudioManager, SoundEffect};
    use quiz_runner::autopilot::autopilot;
    use quiz_runner::sim::{GameEvent, GamePhase, GameState, ObstacleKind, Rect};
    use quiz_runner::{ContentPack, FrameDriver, Tuning};

    /// House sprites have empty space at the bottom; nudge them onto the road
    const HOUSE_Y_OFFSET: f64 = 10.0;

    /// Sprite images, drawn once the browser has decoded them
    struct Sprites {
        player: HtmlImageElement,
        house: HtmlImageElement,
        parrot: HtmlImageElement,
        background: HtmlImageElement,
    }

    impl Sprites {
        fn load(pack: &ContentPack) -> Result<Self, JsValue> {
            Ok(Self {
                player: load_image("assets/girl.png")?,
                house: load_image(&format!("assets/{}.png", pack.ground_label))?,
                parrot: load_image(&format!("assets/{}.png", pack.aerial_label))?,
                background: load_image("assets/background.png")?,
            })
        }
    }

    fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_src(src);
        Ok(img)
    }

    fn is_ready(img: &HtmlImageElement) -> bool {
        img.complete() && img.natural_width() > 0
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: FrameDriver,
        audio: AudioManager,
        pack: ContentPack,
        ctx: CanvasRenderingContext2d,
        sprites: Sprites,
        document: Document,
        /// ArrowDown is physically held
        duck_held: bool,
        idle_mode: bool,
        last_phase: Option<GamePhase>,
    }

    impl Game {
        /// Run one animation frame
        fn update(&mut self, time: f64) {
            if self.idle_mode {
                autopilot(&mut self.state);
            }
            self.driver.frame(&mut self.state, time);

            for event in self.state.drain_events() {
                super::log_event(&self.pack, &self.state.quiz, &event);
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                if event == GameEvent::Resumed {
                    self.sync_duck();
                }
            }
        }

        /// Duck commands are dropped while an overlay is up, so line the
        /// stance back up with the key once play resumes
        fn sync_duck(&mut self) {
            if self.duck_held {
                self.state.start_duck();
            } else {
                self.state.stop_duck();
            }
        }

        fn restart(&mut self) {
            self.state.acknowledge();
            self.driver.reset();
            self.sync_duck();
        }

        /// Render the current frame
        fn render(&self) {
            let snap = self.state.snapshot();
            let ctx = &self.ctx;
            let width = self.state.tuning.field_width as f64;
            let height = self.state.tuning.field_height as f64;

            // Background cropped to the field's aspect ratio (no stretch)
            let bg = &self.sprites.background;
            if is_ready(bg) {
                let src_w = bg.natural_width() as f64;
                let src_h = bg.natural_height() as f64;
                let ratio = width / height;
                let (crop_w, crop_h) = if src_w / ratio > src_h {
                    (src_h * ratio, src_h)
                } else {
                    (src_w, src_w / ratio)
                };
                ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    bg,
                    (src_w - crop_w) / 2.0,
                    (src_h - crop_h) / 2.0,
                    crop_w,
                    crop_h,
                    0.0,
                    0.0,
                    width,
                    height,
                )
                .ok();
            } else {
                ctx.set_fill_style_str("#fff");
                ctx.fill_rect(0.0, 0.0, width, height);
            }

            draw_sprite(ctx, &self.sprites.player, &snap.player.rect, 0.0, "#e91e63");

            for obstacle in &snap.obstacles {
                match obstacle.kind {
                    ObstacleKind::Ground => {
                        draw_sprite(ctx, &self.sprites.house, &obstacle.rect, HOUSE_Y_OFFSET, "#964b00")
                    }
                    ObstacleKind::Aerial => {
                        draw_sprite(ctx, &self.sprites.parrot, &obstacle.rect, 0.0, "#ff0000")
                    }
                }
            }

            ctx.set_fill_style_str("#333");
            ctx.set_font("16px system-ui");
            ctx.fill_text(&format!("Score: {}", snap.display_score), 10.0, 25.0)
                .ok();
            if self.idle_mode {
                ctx.fill_text("AUTOPILOT", width - 100.0, 25.0).ok();
            }
        }

        /// Show the overlay for the current phase, hide the rest
        fn update_overlays(&mut self) {
            let phase = self.state.phase;
            if self.last_phase == Some(phase) {
                return;
            }
            self.last_phase = Some(phase);

            let doc = &self.document;
            set_visible(doc, "quiz-overlay", matches!(phase, GamePhase::QuizPrompt { .. }));
            set_visible(doc, "wrong-overlay", matches!(phase, GamePhase::WrongAnswer { .. }));
            set_visible(doc, "correct-overlay", matches!(phase, GamePhase::CorrectCountdown { .. }));
            set_visible(doc, "death-overlay", matches!(phase, GamePhase::DeathScreen { .. }));

            match phase {
                GamePhase::QuizPrompt { question } => {
                    if let Some(q) = self.state.quiz.question(question) {
                        set_text(doc, "quiz-question", &q.prompt);
                        if let Some(list) = doc.get_element_by_id("quiz-options") {
                            list.set_inner_html("");
                            for (i, option) in q.options.iter().enumerate() {
                                if let Err(e) = append_option(doc, &list, i, option) {
                                    log::error!("Failed to add quiz option: {:?}", e);
                                }
                            }
                        }
                    }
                }
                GamePhase::CorrectCountdown { remaining } => {
                    set_text(doc, "correct-count", &remaining.to_string());
                }
                GamePhase::DeathScreen { hit } => {
                    set_text(doc, "death-message", self.pack.death_message(hit));
                }
                GamePhase::Playing | GamePhase::WrongAnswer { .. } => {}
            }
        }
    }

    fn draw_sprite(
        ctx: &CanvasRenderingContext2d,
        img: &HtmlImageElement,
        rect: &Rect,
        y_offset: f64,
        placeholder: &str,
    ) {
        let (x, y) = (rect.x() as f64, rect.y() as f64);
        let (w, h) = (rect.width() as f64, rect.height() as f64);
        if is_ready(img) {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y + y_offset, w, h)
                .ok();
        } else {
            ctx.set_fill_style_str(placeholder);
            ctx.fill_rect(x, y, w, h);
        }
    }

    fn set_visible(doc: &Document, id: &str, visible: bool) {
        if let Some(el) = doc.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn append_option(doc: &Document, list: &Element, index: usize, text: &str) -> Result<(), JsValue> {
        let btn = doc.create_element("button")?;
        btn.set_text_content(Some(&format!("{}. {}", index + 1, text)));
        btn.set_attribute("data-index", &index.to_string())?;
        list.append_child(&btn)?;
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Quiz Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let pack = ContentPack::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tuning = Tuning::default();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(tuning.field_width as u32);
        canvas.set_height(tuning.field_height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        if let Some(title) = document.get_element_by_id("title") {
            title.set_text_content(Some(&pack.title));
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, tuning, pack.questions.clone()),
            driver: FrameDriver::new(),
            audio: AudioManager::new(),
            sprites: Sprites::load(&pack)?,
            pack,
            ctx,
            document: document.clone(),
            duck_held: false,
            idle_mode: false,
            last_phase: None,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(&window, game.clone());
        setup_quiz_buttons(&document, game.clone());
        setup_focus_loss(&window, game.clone());

        request_animation_frame(game);

        log::info!("Quiz Runner running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();

                if code == "ArrowDown" {
                    g.duck_held = true;
                }

                // Any key dismisses the wrong-answer and death screens
                if g.state.phase.awaits_acknowledge() {
                    if !event.repeat() {
                        g.restart();
                    }
                    return;
                }

                match code.as_str() {
                    "KeyM" => {
                        let muted = g.audio.toggle_muted();
                        log::info!("Muted: {}", muted);
                    }
                    "KeyI" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                        if !g.idle_mode {
                            g.sync_duck();
                        }
                    }
                    _ => {}
                }

                let phase = g.state.phase;
                match phase {
                    GamePhase::QuizPrompt { question } => {
                        let choice = g
                            .state
                            .quiz
                            .question(question)
                            .and_then(|q| q.choice_for_key(&event.key()));
                        if let Some(choice) = choice {
                            g.state.submit_answer(choice);
                        }
                    }
                    GamePhase::Playing => match code.as_str() {
                        "Space" | "ArrowUp" => {
                            event.prevent_default();
                            g.state.jump();
                        }
                        "ArrowDown" => {
                            event.prevent_default();
                            g.state.start_duck();
                        }
                        _ => {}
                    },
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "ArrowDown" {
                    let mut g = game.borrow_mut();
                    g.duck_held = false;
                    g.state.stop_duck();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// One delegated click handler for the option buttons, which are
    /// rebuilt for every question
    fn setup_quiz_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(list) = document.get_element_by_id("quiz-options") else {
            log::warn!("No #quiz-options element; quiz answers are keyboard only");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let index = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-index"))
                .and_then(|s| s.parse::<usize>().ok());
            if let Some(index) = index {
                game.borrow_mut().state.submit_answer(index);
            }
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// A keyup that happens while the window is unfocused never arrives
    fn setup_focus_loss(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            g.duck_held = false;
            g.state.stop_duck();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_overlays();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use quiz_runner::autopilot::autopilot;
    use quiz_runner::sim::GameState;
    use quiz_runner::{FrameDriver, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: quiz-runner [seed] [seconds] [tuning.json]
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };

    let pack = match ContentPack::builtin() {
        Ok(pack) => pack,
        Err(e) => {
            log::error!("Built-in content pack is invalid: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Quiz Runner (native) - headless autopilot, seed {}, {} s", seed, seconds);

    let mut state = GameState::new(seed, tuning, pack.questions.clone());
    let mut driver = FrameDriver::new();
    let mut deaths = 0;

    // 60 Hz synthetic animation frames
    let frames = (seconds * 60.0) as u64;
    for frame in 0..=frames {
        autopilot(&mut state);
        driver.frame(&mut state, frame as f64 * 1000.0 / 60.0);
        for event in state.drain_events() {
            if matches!(event, GameEvent::Died { .. }) {
                deaths += 1;
            }
            log_event(&pack, &state.quiz, &event);
        }
    }

    log::info!("Finished: score {}, {} deaths", state.display_score(), deaths);
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> quiz_runner::Tuning {
    use quiz_runner::Tuning;

    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::error!("Failed to load tuning from {}: {}; using defaults", path, e);
            Tuning::default()
        }
    }
}
