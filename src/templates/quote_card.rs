use crate::animation::interp::{InterpolateOptions, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::composition::registry::Template;
use crate::composition::spec::{FrameCtx, TemplateSpec};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{FramecardError, FramecardResult};
use crate::scene::color::Color;
use crate::scene::model::{Fill, FontWeight, SceneFrame, SceneNode, Shape};

/// Social-media quote card: a themed background, a fading quote and an
/// author line that settles in on a spring.
pub struct QuoteCard;

/// Props accepted by [`QuoteCard`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct QuoteCardProps {
    /// Quote body, rendered in quotation marks.
    pub quote: String,
    /// Attribution line.
    pub author: String,
    /// Visual theme.
    #[serde(default)]
    pub theme: QuoteTheme,
}

/// Closed set of quote-card themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteTheme {
    /// Violet gradient background, white text.
    #[default]
    Gradient,
    /// Flat dark background, white text.
    Dark,
    /// Light gradient background, dark text and colored accents.
    Minimal,
}

impl QuoteCardProps {
    /// Opt-in host-side validation helper; the render path assumes valid props.
    pub fn validate(&self) -> FramecardResult<()> {
        if self.quote.trim().is_empty() {
            return Err(FramecardError::validation("quote must be non-empty"));
        }
        if self.author.trim().is_empty() {
            return Err(FramecardError::validation("author must be non-empty"));
        }
        Ok(())
    }
}

const CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1080,
};

impl QuoteTheme {
    fn background(self) -> Fill {
        match self {
            Self::Gradient => Fill::LinearGradient {
                start: Color::from_rgb8(0x66, 0x7e, 0xea),
                end: Color::from_rgb8(0x76, 0x4b, 0xa2),
                angle_deg: 135.0,
            },
            Self::Dark => Fill::Solid(Color::from_rgb8(0x2c, 0x3e, 0x50)),
            Self::Minimal => Fill::LinearGradient {
                start: Color::from_rgb8(0xf5, 0xf7, 0xfa),
                end: Color::from_rgb8(0xc3, 0xcf, 0xe2),
                angle_deg: 135.0,
            },
        }
    }

    fn text_color(self) -> Color {
        match self {
            Self::Minimal => Color::from_rgb8(0x2c, 0x3e, 0x50),
            _ => Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }

    fn top_circle_color(self) -> Color {
        match self {
            Self::Minimal => Color::from_rgb8(0x4e, 0xcd, 0xc4),
            _ => Color::rgb(1.0, 1.0, 1.0).with_alpha(0.2),
        }
    }

    fn bottom_circle_color(self) -> Color {
        match self {
            Self::Minimal => Color::from_rgb8(0xff, 0x6b, 0x6b),
            _ => Color::rgb(1.0, 1.0, 1.0).with_alpha(0.15),
        }
    }
}

impl Template for QuoteCard {
    type Props = QuoteCardProps;

    fn spec(&self) -> TemplateSpec {
        TemplateSpec {
            id: "QuoteCard".to_owned(),
            duration: FrameIndex(180),
            fps: Fps { num: 30, den: 1 },
            canvas: CANVAS,
        }
    }

    fn default_props(&self) -> Self::Props {
        QuoteCardProps {
            quote: "The only way to do great work is to love what you do.".to_owned(),
            author: "Steve Jobs".to_owned(),
            theme: QuoteTheme::Gradient,
        }
    }

    #[tracing::instrument(skip_all, fields(frame = ctx.frame.0))]
    fn render(&self, ctx: FrameCtx, props: &Self::Props) -> FramecardResult<SceneFrame> {
        let frame = ctx.frame_f64();
        let text_color = props.theme.text_color();

        // Entrance animations.
        let quote_opacity = interpolate(
            frame,
            &[0.0, 30.0],
            &[0.0, 1.0],
            &InterpolateOptions::clamp_right(),
        )?;
        let author_spring = spring(
            ctx.elapsed_since(60.0),
            ctx.fps,
            &SpringConfig::new(100.0, 200.0)?,
        );
        let author_y = interpolate(
            author_spring,
            &[0.0, 1.0],
            &[50.0, 0.0],
            &InterpolateOptions::default(),
        )?;

        let background = SceneNode::shape(
            "background",
            Shape::Rect {
                width: 1080.0,
                height: 1080.0,
            },
            props.theme.background(),
        )
        .at(540.0, 540.0);

        let quote = SceneNode::text("quote", format!("\"{}\"", props.quote), 48.0, text_color)
            .weight(FontWeight::Light)
            .at(540.0, 500.0)
            .with_opacity(quote_opacity);

        let author = SceneNode::text("author", format!("— {}", props.author), 32.0, text_color)
            .weight(FontWeight::Medium)
            .at(540.0, 620.0)
            .offset(0.0, author_y)
            .with_opacity(0.9);

        // Decorative corner circles fade in on offset ramps.
        let top_circle = SceneNode::shape(
            "deco-top-left",
            Shape::Ellipse { rx: 30.0, ry: 30.0 },
            Fill::Solid(props.theme.top_circle_color()),
        )
        .at(90.0, 90.0)
        .with_opacity(interpolate(
            frame,
            &[0.0, 60.0],
            &[0.0, 0.7],
            &InterpolateOptions::default(),
        )?);

        let bottom_circle = SceneNode::shape(
            "deco-bottom-right",
            Shape::Ellipse { rx: 20.0, ry: 20.0 },
            Fill::Solid(props.theme.bottom_circle_color()),
        )
        .at(1000.0, 1000.0)
        .with_opacity(interpolate(
            frame,
            &[30.0, 90.0],
            &[0.0, 0.6],
            &InterpolateOptions::default(),
        )?);

        Ok(SceneFrame {
            frame: ctx.frame,
            canvas: CANVAS,
            root: SceneNode::group(
                "quote-card",
                vec![background, quote, author, top_circle, bottom_circle],
            ),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/quote_card.rs"]
mod tests;
