use crate::animation::interp::{InterpolateOptions, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::composition::registry::Template;
use crate::composition::spec::{FrameCtx, TemplateSpec};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{FramecardError, FramecardResult};
use crate::foundation::format::{discounted_price, format_money, format_percent, format_price};
use crate::scene::color::Color;
use crate::scene::model::{Fill, FontWeight, SceneFrame, SceneNode, Shape};
use crate::timeline::sequence::Sequence;
use kurbo::Affine;

/// Product advertisement: spring-in showcase, sliding title, price pop with
/// optional discount, late call-to-action and a full-frame exit scale.
pub struct ProductAd;

/// Props accepted by [`ProductAd`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ProductAdProps {
    /// Product display name.
    pub product_name: String,
    /// Product image reference, resolved by the host.
    pub product_image: String,
    /// List price.
    pub price: f64,
    /// Optional fractional discount in `[0, 1]`.
    #[serde(default)]
    pub discount: Option<f64>,
    /// Call-to-action label.
    pub call_to_action: String,
    /// Brand palette.
    pub brand_colors: BrandColors,
}

/// Brand palette supplied with the ad.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BrandColors {
    /// Background color.
    pub primary: Color,
    /// Accent color for price and CTA.
    pub accent: Color,
    /// Foreground text color.
    pub text: Color,
}

impl ProductAdProps {
    /// Opt-in host-side validation helper; the render path assumes valid props.
    pub fn validate(&self) -> FramecardResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(FramecardError::validation("product_name must be non-empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(FramecardError::validation("price must be finite and >= 0"));
        }
        if let Some(d) = self.discount
            && !(0.0..=1.0).contains(&d)
        {
            return Err(FramecardError::validation("discount must be in [0, 1]"));
        }
        Ok(())
    }
}

const CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1080,
};

/// Exit transform window length in frames.
const EXIT_WINDOW: f64 = 30.0;

impl Template for ProductAd {
    type Props = ProductAdProps;

    fn spec(&self) -> TemplateSpec {
        TemplateSpec {
            id: "ProductAd".to_owned(),
            duration: FrameIndex(240),
            fps: Fps { num: 30, den: 1 },
            canvas: CANVAS,
        }
    }

    fn default_props(&self) -> Self::Props {
        ProductAdProps {
            product_name: "Premium Headphones".to_owned(),
            product_image: "/product-sample.jpg".to_owned(),
            price: 299.0,
            discount: Some(0.2),
            call_to_action: "Buy Now - 20% Off".to_owned(),
            brand_colors: BrandColors {
                primary: Color::from_rgb8(0x1a, 0x1a, 0x1a),
                accent: Color::from_rgb8(0xff, 0x6b, 0x6b),
                text: Color::from_rgb8(0xff, 0xff, 0xff),
            },
        }
    }

    #[tracing::instrument(skip_all, fields(frame = ctx.frame.0))]
    fn render(&self, ctx: FrameCtx, props: &Self::Props) -> FramecardResult<SceneFrame> {
        let frame = ctx.frame_f64();
        let duration = ctx.duration.0 as f64;
        let colors = &props.brand_colors;

        // Animation timings.
        let entrance = spring(
            ctx.elapsed_since(15.0),
            ctx.fps,
            &SpringConfig::new(100.0, 200.0)?,
        );
        let title_slide_y = interpolate(
            frame,
            &[30.0, 60.0],
            &[100.0, 0.0],
            &InterpolateOptions::clamp_right(),
        )?;
        let price_scale = spring(
            ctx.elapsed_since(90.0),
            ctx.fps,
            &SpringConfig::new(80.0, 300.0)?,
        );
        let cta_opacity = interpolate(
            frame,
            &[150.0, 180.0],
            &[0.0, 1.0],
            &InterpolateOptions::clamp_right(),
        )?;

        // Exit scale-up, active only in the trailing window.
        let exit_scale = interpolate(
            frame,
            &[duration - EXIT_WINDOW, duration],
            &[1.0, 1.1],
            &InterpolateOptions::clamp_left(),
        )?;

        let background = SceneNode::shape(
            "background",
            Shape::Rect {
                width: 1080.0,
                height: 1080.0,
            },
            Fill::Solid(colors.primary),
        )
        .at(540.0, 540.0);

        // Corner decoration bleeding off the top-right edge.
        let decoration = SceneNode::shape(
            "corner-decoration",
            Shape::Ellipse {
                rx: 200.0,
                ry: 200.0,
            },
            Fill::LinearGradient {
                start: colors.accent.with_alpha(0.125),
                end: colors.accent.with_alpha(0.0),
                angle_deg: 45.0,
            },
        )
        .at(1080.0, 0.0)
        .with_opacity(0.3);

        // Product showcase is gated by a sequence spanning the full timeline.
        let showcase_window = Sequence::new("showcase", FrameIndex(0), ctx.duration.0);
        let showcase = showcase_window.map_active(ctx.frame, |_local| {
            SceneNode::group(
                "showcase",
                vec![
                    SceneNode::shape(
                        "showcase-panel",
                        Shape::RoundedRect {
                            width: 648.0,
                            height: 300.0,
                            radius: 20.0,
                        },
                        Fill::LinearGradient {
                            start: colors.accent.with_alpha(0.25),
                            end: colors.accent.with_alpha(0.125),
                            angle_deg: 135.0,
                        },
                    ),
                    SceneNode::text(
                        "showcase-placeholder",
                        "Product Image Placeholder",
                        24.0,
                        colors.text,
                    )
                    .at(0.0, -14.0)
                    .with_opacity(0.7),
                    SceneNode::text(
                        "showcase-source",
                        format!("({})", props.product_image),
                        16.0,
                        colors.text,
                    )
                    .at(0.0, 22.0)
                    .with_opacity(0.7),
                ],
            )
            .at(540.0, 330.0)
            .scaled(entrance)
        });

        let title = SceneNode::text("title", props.product_name.clone(), 64.0, colors.text)
            .weight(FontWeight::Bold)
            .at(540.0, 560.0)
            .offset(0.0, title_slide_y);

        let price_section = price_section(props, price_scale);

        let cta = SceneNode::group(
            "cta",
            vec![
                SceneNode::shape(
                    "cta-pill",
                    Shape::RoundedRect {
                        width: 420.0,
                        height: 72.0,
                        radius: 36.0,
                    },
                    Fill::LinearGradient {
                        start: colors.accent,
                        end: colors.accent.with_alpha(0.8),
                        angle_deg: 135.0,
                    },
                ),
                SceneNode::text("cta-label", props.call_to_action.clone(), 32.0, colors.primary)
                    .weight(FontWeight::Bold),
            ],
        )
        .at(540.0, 840.0)
        .with_opacity(cta_opacity);

        let accent_dot = SceneNode::shape(
            "accent-dot",
            Shape::Ellipse { rx: 10.0, ry: 10.0 },
            Fill::Solid(colors.accent),
        )
        .at(110.0, 970.0)
        .with_opacity(interpolate(
            frame,
            &[60.0, 120.0],
            &[0.0, 0.8],
            &InterpolateOptions::clamp_right(),
        )?);

        let mut children = vec![background, decoration];
        children.extend(showcase);
        children.extend([title, price_section, cta, accent_dot]);

        let mut root = SceneNode::group("product-ad", children);
        root.transform = Affine::scale_about(exit_scale, CANVAS.center());

        Ok(SceneFrame {
            frame: ctx.frame,
            canvas: CANVAS,
            root,
        })
    }
}

fn price_section(props: &ProductAdProps, scale: f64) -> SceneNode {
    let colors = &props.brand_colors;
    let final_price = discounted_price(props.price, props.discount);
    let mut children = Vec::new();

    if props.discount.is_some() {
        children.push(
            SceneNode::text("price-original", format_price(props.price), 36.0, colors.text)
                .strikethrough()
                .at(-160.0, 0.0)
                .with_opacity(0.6),
        );
    }

    children.push(
        SceneNode::text("price-current", format_money(final_price), 56.0, colors.accent)
            .weight(FontWeight::Bold)
            .at(if props.discount.is_some() { 60.0 } else { 0.0 }, 0.0),
    );

    if let Some(discount) = props.discount {
        children.push(
            SceneNode::text(
                "price-savings",
                format!("Save {}!", format_percent(discount)),
                24.0,
                colors.accent,
            )
            .weight(FontWeight::Bold)
            .at(0.0, 52.0),
        );
    }

    SceneNode::group("price", children)
        .at(540.0, 680.0)
        .scaled(scale)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/product_ad.rs"]
mod tests;
