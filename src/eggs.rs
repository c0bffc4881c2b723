use crate::config::EggConfig;
use crate::keys::{KeySequence, TypedText};
use crate::particles::ParticleTrail;
use crate::random::RandomSource;

pub const COFFEE_MESSAGES: [&str; 4] = [
    "☕ Thanks for the coffee!",
    "🚀 Caffeine boost activated!",
    "💻 Coding powers increased!",
    "⚡ Energy level: Maximum!",
];

pub const HELLO_FILTER: &str = "hue-rotate(180deg)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Secret,
    Hearts,
    Hello,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [OverlayKind::Secret, OverlayKind::Hearts, OverlayKind::Hello];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::Secret => "secret",
            OverlayKind::Hearts => "hearts",
            OverlayKind::Hello => "hello",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Info,
    MouseHint,
}

// Closing keeps the node mounted while its exit animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Open,
    Closing,
}

impl Phase {
    fn of(visible: bool, closing: bool) -> Self {
        match (visible, closing) {
            (true, _) => Phase::Open,
            (false, true) => Phase::Closing,
            (false, false) => Phase::Hidden,
        }
    }

    pub fn is_mounted(&self) -> bool {
        *self != Phase::Hidden
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    Overlay { kind: OverlayKind, generation: u64 },
    Closed { kind: OverlayKind, generation: u64 },
    PanelClosed { panel: Panel },
    Particle { id: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFilter {
    HueRotate,
    Clear,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Schedule { delay_ms: u32, expiry: Expiry },
    SetPageFilter(PageFilter),
    PersistInfoDismissed,
    Alert(&'static str),
    CancelTimers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Enabled,
    Disabled,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct OverlayFlag {
    visible: bool,
    closing: bool,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EggState {
    config: EggConfig,
    enabled: bool,
    secret: OverlayFlag,
    hearts: OverlayFlag,
    hello: OverlayFlag,
    filter_active: bool,
    mouse_hint: bool,
    hint_closing: bool,
    info_visible: bool,
    info_closing: bool,
    keys: KeySequence,
    typed: TypedText,
    particles: ParticleTrail,
}

impl EggState {
    pub fn new(config: EggConfig, width: Option<f64>, info_dismissed: bool) -> Self {
        let config = config.validated();
        let enabled = width.is_some_and(|width| config.is_enabled_for(width));
        Self {
            config,
            enabled,
            secret: OverlayFlag::default(),
            hearts: OverlayFlag::default(),
            hello: OverlayFlag::default(),
            filter_active: false,
            mouse_hint: enabled,
            hint_closing: false,
            info_visible: !info_dismissed,
            info_closing: false,
            keys: KeySequence::default(),
            typed: TypedText::default(),
            particles: ParticleTrail::default(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        self.flag(kind).visible
    }

    pub fn mouse_hint(&self) -> bool {
        self.mouse_hint
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn phase(&self, kind: OverlayKind) -> Phase {
        let flag = self.flag(kind);
        Phase::of(flag.visible, flag.closing)
    }

    pub fn panel_phase(&self, panel: Panel) -> Phase {
        match panel {
            Panel::Info => Phase::of(self.info_visible, self.info_closing),
            Panel::MouseHint => Phase::of(self.mouse_hint, self.hint_closing),
        }
    }

    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    pub fn particles(&self) -> &ParticleTrail {
        &self.particles
    }

    fn flag(&self, kind: OverlayKind) -> &OverlayFlag {
        match kind {
            OverlayKind::Secret => &self.secret,
            OverlayKind::Hearts => &self.hearts,
            OverlayKind::Hello => &self.hello,
        }
    }

    fn flag_mut(&mut self, kind: OverlayKind) -> &mut OverlayFlag {
        match kind {
            OverlayKind::Secret => &mut self.secret,
            OverlayKind::Hearts => &mut self.hearts,
            OverlayKind::Hello => &mut self.hello,
        }
    }

    fn duration(&self, kind: OverlayKind) -> u32 {
        match kind {
            OverlayKind::Secret => self.config.secret_duration_ms,
            OverlayKind::Hearts => self.config.hearts_duration_ms,
            OverlayKind::Hello => self.config.hello_duration_ms,
        }
    }

    pub fn resize(&mut self, width: f64) -> (Transition, Vec<Effect>) {
        let next = self.config.is_enabled_for(width);
        if next == self.enabled {
            return (Transition::Unchanged, Vec::new());
        }
        self.enabled = next;
        if next {
            self.mouse_hint = true;
            self.hint_closing = false;
            return (Transition::Enabled, Vec::new());
        }

        let mut effects = vec![Effect::CancelTimers];
        for kind in OverlayKind::ALL {
            let flag = self.flag_mut(kind);
            flag.visible = false;
            flag.closing = false;
            flag.generation += 1;
        }
        if self.filter_active {
            self.filter_active = false;
            effects.push(Effect::SetPageFilter(PageFilter::Clear));
        }
        self.mouse_hint = false;
        self.hint_closing = false;
        self.info_closing = false;
        self.keys.clear();
        self.typed.clear();
        self.particles.clear();
        (Transition::Disabled, effects)
    }

    pub fn trigger(&mut self, kind: OverlayKind) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let delay_ms = self.duration(kind);
        let flag = self.flag_mut(kind);
        flag.visible = true;
        flag.closing = false;
        flag.generation += 1;
        let generation = flag.generation;
        tracing::debug!("easter-eggs: {} triggered", kind.as_str());

        let mut effects = Vec::with_capacity(2);
        if kind == OverlayKind::Hello {
            self.filter_active = true;
            effects.push(Effect::SetPageFilter(PageFilter::HueRotate));
        }
        effects.push(Effect::Schedule {
            delay_ms,
            expiry: Expiry::Overlay { kind, generation },
        });
        effects
    }

    pub fn key_down(&mut self, key: &str) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let bound = self.config.secret_len();
        if self.keys.push(key, bound, &self.config.secret_word) {
            return self.trigger(OverlayKind::Secret);
        }
        Vec::new()
    }

    pub fn double_click(&mut self) -> Vec<Effect> {
        self.trigger(OverlayKind::Hearts)
    }

    pub fn mouse_move(&mut self, x: f64, y: f64, rng: &mut dyn RandomSource) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.mouse_hint {
            self.mouse_hint = false;
            self.hint_closing = true;
            effects.push(self.close_panel_after_exit(Panel::MouseHint));
        }
        if rng.chance(self.config.particle_probability) {
            let id = self.particles.spawn(x, y, self.config.max_particles);
            effects.push(Effect::Schedule {
                delay_ms: self.config.particle_lifetime_ms,
                expiry: Expiry::Particle { id },
            });
        }
        effects
    }

    pub fn key_press(&mut self, key: &str) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let matched = self.typed.push(
            key,
            &self.config.hello_word,
            self.config.typed_text_limit,
            self.config.typed_text_keep,
        );
        if matched {
            return self.trigger(OverlayKind::Hello);
        }
        Vec::new()
    }

    pub fn random_trigger(&mut self, rng: &mut dyn RandomSource) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let kind = OverlayKind::ALL[rng.pick(OverlayKind::ALL.len())];
        self.trigger(kind)
    }

    pub fn coffee(&self, rng: &mut dyn RandomSource) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        vec![Effect::Alert(COFFEE_MESSAGES[rng.pick(COFFEE_MESSAGES.len())])]
    }

    pub fn dismiss(&mut self, kind: OverlayKind) -> Vec<Effect> {
        self.close(kind)
    }

    fn close(&mut self, kind: OverlayKind) -> Vec<Effect> {
        let delay_ms = self.config.exit_duration_ms;
        let flag = self.flag_mut(kind);
        if !flag.visible {
            return Vec::new();
        }
        flag.visible = false;
        flag.closing = true;
        let generation = flag.generation;
        vec![Effect::Schedule {
            delay_ms,
            expiry: Expiry::Closed { kind, generation },
        }]
    }

    fn close_panel_after_exit(&self, panel: Panel) -> Effect {
        Effect::Schedule {
            delay_ms: self.config.exit_duration_ms,
            expiry: Expiry::PanelClosed { panel },
        }
    }

    pub fn hide_info(&mut self) -> Vec<Effect> {
        if !self.info_visible {
            return Vec::new();
        }
        self.info_visible = false;
        self.info_closing = true;
        vec![self.close_panel_after_exit(Panel::Info)]
    }

    pub fn dismiss_info_permanently(&mut self) -> Vec<Effect> {
        let mut effects = self.hide_info();
        effects.push(Effect::PersistInfoDismissed);
        effects
    }

    pub fn expire(&mut self, expiry: Expiry) -> Vec<Effect> {
        match expiry {
            Expiry::Particle { id } => {
                self.particles.remove(id);
                Vec::new()
            }
            Expiry::Overlay { kind, generation } => {
                if self.flag(kind).generation != generation {
                    return Vec::new();
                }
                let mut effects = self.close(kind);
                if kind == OverlayKind::Hello && self.filter_active {
                    self.filter_active = false;
                    effects.push(Effect::SetPageFilter(PageFilter::Clear));
                }
                effects
            }
            Expiry::Closed { kind, generation } => {
                let flag = self.flag_mut(kind);
                if flag.generation == generation {
                    flag.closing = false;
                }
                Vec::new()
            }
            Expiry::PanelClosed { panel } => {
                match panel {
                    Panel::Info => self.info_closing = false,
                    Panel::MouseHint => self.hint_closing = false,
                }
                Vec::new()
            }
        }
    }
}
