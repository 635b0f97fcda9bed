// src/styles.rs
use serde::{Deserialize, Serialize};

use crate::models::AspectRatio;

/// Closed set of creative transformations offered by the wizard. The set is
/// fixed and small, so a tagged enum beats any plugin mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    IceCube,
    LiquidMetal,
    FloatingFragments,
    UnderwaterDream,
    NeonGlow,
}

impl StyleKey {
    /// Styles applied when the request carries no `styles` field.
    pub const DEFAULT_SELECTION: [StyleKey; 2] = [StyleKey::IceCube, StyleKey::LiquidMetal];

    pub fn display_name(&self) -> &'static str {
        match self {
            StyleKey::IceCube => "Frozen in Ice",
            StyleKey::LiquidMetal => "Liquid Metal",
            StyleKey::FloatingFragments => "Floating Fragments",
            StyleKey::UnderwaterDream => "Underwater Dream",
            StyleKey::NeonGlow => "Neon Glow",
        }
    }

    /// Render the template for this style. Deterministic and side-effect
    /// free: the output depends only on the three arguments. `colors` is the
    /// already-joined palette list.
    pub fn render(&self, description: &str, colors: &str, aspect_ratio: AspectRatio) -> String {
        match self {
            StyleKey::IceCube => {
                let framing = match aspect_ratio {
                    AspectRatio::Portrait => "Shot in 9:16 vertical format",
                    AspectRatio::Landscape => "Shot in 16:9 horizontal format",
                };
                format!(
                    "Transform this into a subject perfectly suspended inside a massive, crystal-clear ice block. The ice is flawlessly transparent like museum-grade acrylic, with tiny air bubbles trapped inside creating constellations of light. The surface feels perfectly smooth and impossibly cold, with fine frost patterns blooming at the edges where condensation meets frozen surface.\n\n\
                    CONCEPT TO TRANSFORM: {description}\n\n\
                    The ice block has real weight and presence—corners are sharp and geometric, catching light and throwing rainbow refractions across nearby surfaces. Small cracks run through the ice like lightning frozen in time, each one a perfect prism splitting light into colors that echo {colors}. Water droplets bead on the outside surface, each one a tiny magnifying lens.\n\n\
                    The subject inside appears ghosted through the ice—partially obscured by refraction, its edges softened by the dense cold medium. Shadows pool beneath the ice block, deep blue-grey and diffused. The lighting is clinical but beautiful, like a high-end museum display case, with soft highlights dancing across every frozen surface.\n\n\
                    The background matches the mood of the input but simplified—neutral tones that let the ice sculpture command attention. {framing}, perfect for premium digital displays.\n\n\
                    Make this feel like tangible sculpture—something you could reach out and touch, that would make your fingertips ache with cold. NO text, NO logos, NO frames. This is the final photograph."
                )
            }
            StyleKey::LiquidMetal => {
                let framing = match aspect_ratio {
                    AspectRatio::Portrait => "Composed in 9:16 vertical format",
                    AspectRatio::Landscape => "Composed in 16:9 horizontal format",
                };
                format!(
                    "Reimagine this as a living sculpture made of liquid chrome, caught in a single frozen moment. The metal is impossibly smooth and reflective—like mercury pooled on black glass, but defying gravity and frozen mid-splash. Its surface is a perfect mirror, catching distorted reflections of studio lights and the surrounding space.\n\n\
                    CONCEPT TO TRANSFORM: {description}\n\n\
                    The liquid metal has real physical weight—you can see the tension in how it pulls and forms, thick droplets stretching into strings before breaking. Some drops hover in mid-air, spherical and perfect. The surface tension is visible, that slight curve where liquid meets nothing. Colors shift across the chrome surface in iridescent waves: {colors} bleeding into each other like oil on water.\n\n\
                    The metal appears wet and alive, catching light in sharp specular highlights that bloom white-hot against the dark reflective surface. Small ripples frozen across its surface suggest recent movement. Tiny satellite droplets scatter around the main form, each one a perfect chrome sphere reflecting the entire scene in miniature.\n\n\
                    Background is pure matte black or deep charcoal grey—the kind of darkness that makes the chrome absolutely pop. Lighting is dramatic and directional, like high-end automotive photography, with rim lights tracing every edge and curve.\n\n\
                    {framing}. The feel is tactile and visceral—you can almost feel the cold metallic weight, smell the sharp metallic scent. NO text, NO logos, NO frames. This is the final image."
                )
            }
            StyleKey::FloatingFragments => {
                let framing = match aspect_ratio {
                    AspectRatio::Portrait => "Framed in 9:16 vertical format",
                    AspectRatio::Landscape => "Framed in 16:9 horizontal format",
                };
                format!(
                    "Break this into hundreds of floating pieces, suspended in a single moment of elegant explosion. Each fragment is geometrically precise—clean edges, sharp angles, like shattered glass caught in zero gravity. They range from large primary chunks down to dust-fine particles, all hanging perfectly still in space.\n\n\
                    CONCEPT TO BREAK APART: {description}\n\n\
                    The pieces have real dimension and weight. You can see the thickness of each fragment, the way light catches on beveled edges and throws tiny shadows. Some pieces are fully illuminated, others in deep shadow, creating dramatic contrast. Certain fragments glow softly from within, lit with colors that reference {colors}—like stained glass in a dark cathedral.\n\n\
                    The explosion pattern is beautiful and intentional—pieces disperse outward in a perfect gradient, dense at the center and diffusing to fine mist at the edges. You can trace the path of each major fragment, see how they relate to their neighbors. Some pieces still connect by thin threads or energy wisps, showing where they just pulled apart.\n\n\
                    Background is atmospheric smoke or fog in deep charcoal or navy—just enough to give depth and make the suspended particles visible. Dramatic backlighting creates rim light around fragment edges, making them glow. Front lighting is softer, revealing surface detail and creating that three-dimensional depth.\n\n\
                    {framing}. This feels physical and real—you could reach into the scene and touch the floating pieces, feel their cool smooth surfaces. NO text, NO logos, NO frames. This is the final shot."
                )
            }
            StyleKey::UnderwaterDream => {
                let framing = match aspect_ratio {
                    AspectRatio::Portrait => "Shot in 9:16 vertical format",
                    AspectRatio::Landscape => "Shot in 16:9 horizontal format",
                };
                format!(
                    "Submerge this in crystal-clear water, floating weightless in a dreamlike underwater space. The water is pristine—the kind of clarity you only find in deep pools or tropical reefs. Sunlight penetrates from above in defined shafts, each beam visible through suspended particles and micro-bubbles.\n\n\
                    CONCEPT TO SUBMERGE: {description}\n\n\
                    Everything moves in slow motion. Fabric or loose elements drift and billow with underwater physics—that graceful, flowing movement unique to submerged objects. Hair or flowing materials create beautiful fluid shapes, backlit and glowing. Small bubbles rise upward in lazy spirals, each one catching and refracting light into tiny prisms.\n\n\
                    The water itself has weight and presence. You can see subtle distortion from refraction, that slight blue-green color shift that happens underwater. Caustic light patterns dance across surfaces—those bright, wavy shadows created by sunlight filtering through water's surface. The colors {colors} bleed and diffuse softly through the water medium.\n\n\
                    The subject floats in that perfect underwater stillness, suspended in liquid space. Lighting is soft and diffused by the water itself, creating that ethereal glow. Shadows are gentle and blue-tinted. You can almost feel the pressure of the water, the coolness on your skin, the way sound is muffled.\n\n\
                    Background matches the input image's mood but filtered through water—hazier, softer, tinged blue-green. {framing}. This feels serene and meditative—tangible but dreamlike. NO text, NO logos, NO frames. This is the final photograph."
                )
            }
            StyleKey::NeonGlow => {
                let framing = match aspect_ratio {
                    AspectRatio::Portrait => "Composed in 9:16 vertical format",
                    AspectRatio::Landscape => "Composed in 16:9 horizontal format",
                };
                format!(
                    "Illuminate this with vibrant neon light—the real electric glow of noble gases in glass tubes. The light has that particular quality of neon: intense, almost humming with energy, bleeding and blooming in the atmosphere. Colors are super-saturated and electric: {colors} rendered as pure glowing neon.\n\n\
                    CONCEPT TO ILLUMINATE: {description}\n\n\
                    The neon creates real physical glow—not just colored light, but that hazy bloom you get in night photography, where bright lights bleed into the surrounding air. Light beams are visible through atmospheric haze, each ray defined and glowing. The glow is strong enough to create colored reflections on nearby surfaces—wet pavement, glossy materials, glass.\n\n\
                    The environment feels like a night scene—dark enough that the neon absolutely pops, but with enough ambient light to see forms and shapes. There's atmosphere in the air: light fog or mist that makes the neon beams visible, maybe a slight rain that adds reflections and intensifies colors. You can see the individual neon tubes sometimes—their characteristic linear forms.\n\n\
                    Color contrast is extreme: deep blacks and shadows against vibrant, glowing highlights. The light is moody and dramatic, with harsh edges where glow meets shadow. Some areas over-expose into pure white-hot brightness, others drop to complete black—that characteristic high-contrast night look.\n\n\
                    Background echoes the input image but pushed into darkness, lit only by neon spill. {framing}. The feeling is electric and alive—you can almost hear the buzz of the transformers, feel the humid night air, smell the ozone. NO text, NO logos, NO frames. This is the final capture."
                )
            }
        }
    }
}

#[cfg(test)]
pub const ALL_STYLES: [StyleKey; 5] = [
    StyleKey::IceCube,
    StyleKey::LiquidMetal,
    StyleKey::FloatingFragments,
    StyleKey::UnderwaterDream,
    StyleKey::NeonGlow,
];
