//! Particle background configuration
//!
//! Mirrors the subset of the tsParticles options schema the page uses.
//! Serializes to the camelCase JSON the engine expects.

use serde::Serialize;

use crate::theme::ThemeMode;

/// Particle colors in dark mode
pub const DARK_PALETTE: [&str; 4] = ["#4f46e5", "#7c3aed", "#2563eb", "#db2777"];

/// Particle color in light mode
pub const LIGHT_COLOR: &str = "#000000";

/// `{ "value": ... }` wrapper used for every color in the schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOption {
    pub value: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Palette(Vec<String>),
}

impl ColorOption {
    pub fn single(color: &str) -> Self {
        Self {
            value: ColorValue::Single(color.to_string()),
        }
    }

    pub fn palette(colors: &[&str]) -> Self {
        Self {
            value: ColorValue::Palette(colors.iter().map(|c| c.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Background {
    pub color: ColorOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventToggle {
    pub enable: bool,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractivityEvents {
    pub on_click: EventToggle,
    pub on_hover: EventToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PushMode {
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepulseMode {
    pub distance: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractivityModes {
    pub push: PushMode,
    pub repulse: RepulseMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interactivity {
    pub events: InteractivityEvents,
    pub modes: InteractivityModes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutModes {
    pub default: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attract {
    pub enable: bool,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub direction: String,
    pub enable: bool,
    pub out_modes: OutModes,
    pub random: bool,
    pub speed: f64,
    pub straight: bool,
    pub attract: Attract,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Number {
    pub density: Density,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAnimation {
    pub enable: bool,
    pub speed: f64,
    pub sync: bool,
    pub minimum_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimatedRange {
    pub animation: ValueAnimation,
    pub value: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwinkleParticles {
    pub enable: bool,
    pub frequency: f64,
    pub opacity: f64,
    pub color: ColorOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Twinkle {
    pub particles: TwinkleParticles,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particles {
    pub color: ColorOption,
    #[serde(rename = "move")]
    pub movement: Movement,
    pub number: Number,
    pub opacity: AnimatedRange,
    pub shape: Shape,
    pub size: AnimatedRange,
    pub twinkle: Twinkle,
}

/// Full engine configuration, a pure function of the theme
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticlesOptions {
    pub background: Background,
    pub fps_limit: u32,
    pub interactivity: Interactivity,
    pub particles: Particles,
    pub detect_retina: bool,
}

impl ParticlesOptions {
    pub fn for_theme(theme: ThemeMode) -> Self {
        let color = match theme {
            ThemeMode::Dark => ColorOption::palette(&DARK_PALETTE),
            ThemeMode::Light => ColorOption::single(LIGHT_COLOR),
        };

        let mut twinkle_colors = vec!["#ffffff"];
        twinkle_colors.extend_from_slice(&DARK_PALETTE);

        Self {
            background: Background {
                color: ColorOption::single("transparent"),
            },
            fps_limit: 120,
            interactivity: Interactivity {
                events: InteractivityEvents {
                    on_click: EventToggle {
                        enable: true,
                        mode: "push".into(),
                    },
                    on_hover: EventToggle {
                        enable: true,
                        mode: "repulse".into(),
                    },
                },
                modes: InteractivityModes {
                    push: PushMode { quantity: 4 },
                    repulse: RepulseMode {
                        distance: 200.0,
                        duration: 0.4,
                    },
                },
            },
            particles: Particles {
                color,
                movement: Movement {
                    direction: "none".into(),
                    enable: true,
                    out_modes: OutModes {
                        default: "bounce".into(),
                    },
                    random: true,
                    speed: 0.8,
                    straight: false,
                    attract: Attract {
                        enable: true,
                        rotate_x: 600.0,
                        rotate_y: 1200.0,
                    },
                },
                number: Number {
                    density: Density {
                        enable: true,
                        area: 800.0,
                    },
                    value: 40,
                },
                opacity: AnimatedRange {
                    animation: ValueAnimation {
                        enable: true,
                        speed: 0.05,
                        sync: false,
                        minimum_value: 0.1,
                    },
                    value: Range { min: 0.1, max: 0.5 },
                },
                shape: Shape {
                    kind: "circle".into(),
                },
                size: AnimatedRange {
                    animation: ValueAnimation {
                        enable: true,
                        speed: 2.0,
                        sync: false,
                        minimum_value: 1.0,
                    },
                    value: Range { min: 1.0, max: 3.0 },
                },
                twinkle: Twinkle {
                    particles: TwinkleParticles {
                        enable: true,
                        frequency: 0.05,
                        opacity: 1.0,
                        color: ColorOption::palette(&twinkle_colors),
                    },
                },
            },
            detect_retina: true,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dark_snapshot() {
        let value = serde_json::to_value(ParticlesOptions::for_theme(ThemeMode::Dark)).unwrap();
        let expected = json!({
            "background": { "color": { "value": "transparent" } },
            "fpsLimit": 120,
            "interactivity": {
                "events": {
                    "onClick": { "enable": true, "mode": "push" },
                    "onHover": { "enable": true, "mode": "repulse" }
                },
                "modes": {
                    "push": { "quantity": 4 },
                    "repulse": { "distance": 200.0, "duration": 0.4 }
                }
            },
            "particles": {
                "color": { "value": ["#4f46e5", "#7c3aed", "#2563eb", "#db2777"] },
                "move": {
                    "direction": "none",
                    "enable": true,
                    "outModes": { "default": "bounce" },
                    "random": true,
                    "speed": 0.8,
                    "straight": false,
                    "attract": { "enable": true, "rotateX": 600.0, "rotateY": 1200.0 }
                },
                "number": { "density": { "enable": true, "area": 800.0 }, "value": 40 },
                "opacity": {
                    "animation": { "enable": true, "speed": 0.05, "sync": false, "minimumValue": 0.1 },
                    "value": { "min": 0.1, "max": 0.5 }
                },
                "shape": { "type": "circle" },
                "size": {
                    "animation": { "enable": true, "speed": 2.0, "sync": false, "minimumValue": 1.0 },
                    "value": { "min": 1.0, "max": 3.0 }
                },
                "twinkle": {
                    "particles": {
                        "enable": true,
                        "frequency": 0.05,
                        "opacity": 1.0,
                        "color": { "value": ["#ffffff", "#4f46e5", "#7c3aed", "#2563eb", "#db2777"] }
                    }
                }
            },
            "detectRetina": true
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_light_uses_single_black() {
        let value = serde_json::to_value(ParticlesOptions::for_theme(ThemeMode::Light)).unwrap();
        assert_eq!(value["particles"]["color"]["value"], json!("#000000"));
        // twinkle palette does not follow the theme
        assert_eq!(
            value["particles"]["twinkle"]["particles"]["color"]["value"][0],
            json!("#ffffff")
        );
    }

    #[test]
    fn test_only_particle_color_depends_on_theme() {
        let mut dark = ParticlesOptions::for_theme(ThemeMode::Dark);
        let light = ParticlesOptions::for_theme(ThemeMode::Light);
        assert_ne!(dark, light);
        dark.particles.color = light.particles.color.clone();
        assert_eq!(dark, light);
    }
}
