use crate::animation::interp::{InterpolateOptions, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::composition::registry::Template;
use crate::composition::spec::{FrameCtx, TemplateSpec};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{FramecardError, FramecardResult};
use crate::foundation::format::format_counter;
use crate::scene::color::Color;
use crate::scene::model::{Fill, FontWeight, SceneFrame, SceneNode, Shape};
use crate::timeline::sequence::Sequence;

/// Personalized year-in-review recap: welcome hero, staggered stat counters
/// and an achievement showcase, each gated by its own timeline sequence.
pub struct UserStatsVideo;

/// Props accepted by [`UserStatsVideo`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UserStatsProps {
    /// Display name used in the welcome hero.
    pub user_name: String,
    /// Avatar image reference, resolved by the host.
    pub user_avatar: String,
    /// Stat counters animated in the middle section.
    pub stats: UserStats,
    /// Achievement labels; may be empty.
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Stat counters, animated in declaration order.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct UserStats {
    /// Total views.
    pub views: u64,
    /// Follower count.
    pub followers: u64,
    /// Like count.
    pub likes: u64,
    /// Published video count.
    pub videos: u64,
}

impl UserStats {
    /// Entries in display order.
    pub fn entries(&self) -> [(&'static str, u64); 4] {
        [
            ("views", self.views),
            ("followers", self.followers),
            ("likes", self.likes),
            ("videos", self.videos),
        ]
    }
}

impl UserStatsProps {
    /// Opt-in host-side validation helper; the render path assumes valid props.
    pub fn validate(&self) -> FramecardResult<()> {
        if self.user_name.trim().is_empty() {
            return Err(FramecardError::validation("user_name must be non-empty"));
        }
        Ok(())
    }
}

const CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

const ACCENT: Color = Color::from_rgb8(0x4e, 0xcd, 0xc4);
const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

impl Template for UserStatsVideo {
    type Props = UserStatsProps;

    fn spec(&self) -> TemplateSpec {
        TemplateSpec {
            id: "UserStatsVideo".to_owned(),
            duration: FrameIndex(300),
            fps: Fps { num: 30, den: 1 },
            canvas: CANVAS,
        }
    }

    fn default_props(&self) -> Self::Props {
        UserStatsProps {
            user_name: "Alex Creator".to_owned(),
            user_avatar: "/avatar-sample.jpg".to_owned(),
            stats: UserStats {
                views: 125_000,
                followers: 5_420,
                likes: 18_500,
                videos: 47,
            },
            achievements: vec![
                "10K Followers".to_owned(),
                "Viral Video".to_owned(),
                "Creator of the Month".to_owned(),
            ],
        }
    }

    #[tracing::instrument(skip_all, fields(frame = ctx.frame.0))]
    fn render(&self, ctx: FrameCtx, props: &Self::Props) -> FramecardResult<SceneFrame> {
        let welcome = Sequence::new("welcome", FrameIndex(0), 90);
        let stats = Sequence::new("stats", FrameIndex(90), 120);
        let achievements = Sequence::new("achievements", FrameIndex(210), 90);

        let background = SceneNode::shape(
            "background",
            Shape::Rect {
                width: 1920.0,
                height: 1080.0,
            },
            Fill::LinearGradient {
                start: Color::from_rgb8(0x1e, 0x3c, 0x72),
                end: Color::from_rgb8(0x2a, 0x52, 0x98),
                angle_deg: 135.0,
            },
        )
        .at(960.0, 540.0);

        // Soft glow bleeding off the top-left corner.
        let glow = SceneNode::shape(
            "corner-glow",
            Shape::Ellipse {
                rx: 300.0,
                ry: 300.0,
            },
            Fill::RadialGradient {
                start: ACCENT.with_alpha(0.2),
                end: ACCENT.with_alpha(0.0),
            },
        )
        .at(0.0, 0.0);

        let mut children = vec![background, glow];

        if let Some(node) = welcome.map_active(ctx.frame, |local| {
            welcome_section(ctx.rebased(local), props)
        }) {
            children.push(node?);
        }
        if let Some(node) = stats.map_active(ctx.frame, |local| {
            stats_section(ctx.rebased(local), &props.stats)
        }) {
            children.push(node?);
        }
        if let Some(node) = achievements.map_active(ctx.frame, |local| {
            achievement_section(ctx.rebased(local), &props.achievements)
        }) {
            children.push(node?);
        }

        Ok(SceneFrame {
            frame: ctx.frame,
            canvas: CANVAS,
            root: SceneNode::group("user-stats", children),
        })
    }
}

fn welcome_section(ctx: FrameCtx, props: &UserStatsProps) -> FramecardResult<SceneNode> {
    let local = ctx.frame_f64();

    let name_spring = spring(
        ctx.elapsed_since(20.0),
        ctx.fps,
        &SpringConfig::new(100.0, 200.0)?,
    );
    let avatar_scale = interpolate(
        local,
        &[0.0, 30.0],
        &[0.0, 1.0],
        &InterpolateOptions::clamp_right(),
    )?;

    let avatar = SceneNode::group(
        "avatar",
        vec![
            SceneNode::shape(
                "avatar-disc",
                Shape::Ellipse {
                    rx: 100.0,
                    ry: 100.0,
                },
                Fill::LinearGradient {
                    start: ACCENT,
                    end: Color::from_rgb8(0x44, 0xa0, 0x8d),
                    angle_deg: 135.0,
                },
            ),
            SceneNode::text("avatar-label", "Avatar", 24.0, WHITE).with_opacity(0.8),
        ],
    )
    .at(960.0, 320.0)
    .scaled(avatar_scale);

    let name = SceneNode::text(
        "welcome-name",
        format!("Welcome, {}!", props.user_name),
        72.0,
        WHITE,
    )
    .weight(FontWeight::Bold)
    .at(960.0, 540.0)
    .scaled(name_spring);

    let subtitle = SceneNode::text("welcome-subtitle", "Your 2024 Year in Review", 32.0, WHITE)
        .at(960.0, 630.0)
        .with_opacity(interpolate(
            local,
            &[40.0, 70.0],
            &[0.0, 0.8],
            &InterpolateOptions::default(),
        )?);

    Ok(SceneNode::group("welcome", vec![avatar, name, subtitle]))
}

fn stats_section(ctx: FrameCtx, stats: &UserStats) -> FramecardResult<SceneNode> {
    let local = ctx.frame_f64();
    let mut cards = Vec::with_capacity(4);

    for (index, (label, target)) in stats.entries().into_iter().enumerate() {
        let start = index as f64 * 15.0;
        // Clamped on both sides: cards not yet in their window stay collapsed
        // at zero rather than extrapolating to a mirrored scale.
        let count_up = interpolate(
            local,
            &[start, start + 45.0],
            &[0.0, target as f64],
            &InterpolateOptions::clamp(),
        )?;
        let card_scale = interpolate(
            local,
            &[start, start + 30.0],
            &[0.0, 1.0],
            &InterpolateOptions::clamp(),
        )?;

        // 2x2 grid around canvas center.
        let x = if index % 2 == 0 { 660.0 } else { 1260.0 };
        let y = if index < 2 { 390.0 } else { 690.0 };

        cards.push(
            SceneNode::group(
                format!("stat-{label}"),
                vec![
                    SceneNode::shape(
                        format!("stat-{label}-card"),
                        Shape::RoundedRect {
                            width: 540.0,
                            height: 260.0,
                            radius: 20.0,
                        },
                        Fill::Solid(WHITE.with_alpha(0.1)),
                    ),
                    SceneNode::text(
                        format!("stat-{label}-label"),
                        label.to_uppercase(),
                        28.0,
                        WHITE,
                    )
                    .at(0.0, -70.0)
                    .with_opacity(0.9),
                    SceneNode::text(
                        format!("stat-{label}-value"),
                        format_counter(count_up),
                        64.0,
                        ACCENT,
                    )
                    .weight(FontWeight::Bold)
                    .at(0.0, 30.0),
                ],
            )
            .at(x, y)
            .scaled(card_scale),
        );
    }

    Ok(SceneNode::group("stats", cards))
}

fn achievement_section(ctx: FrameCtx, achievements: &[String]) -> FramecardResult<SceneNode> {
    let local = ctx.frame_f64();

    let header = SceneNode::text("achievements-header", "🏆 Your Achievements", 48.0, WHITE)
        .at(960.0, 300.0)
        .with_opacity(interpolate(
            local,
            &[0.0, 30.0],
            &[0.0, 1.0],
            &InterpolateOptions::default(),
        )?);

    let mut children = vec![header];
    for (index, achievement) in achievements.iter().enumerate() {
        let delay = index as f64 * 20.0;
        let opacity = interpolate(
            local,
            &[delay, delay + 30.0],
            &[0.0, 1.0],
            &InterpolateOptions::clamp_right(),
        )?;
        let slide_y = interpolate(
            local,
            &[delay, delay + 30.0],
            &[50.0, 0.0],
            &InterpolateOptions::clamp_right(),
        )?;

        children.push(
            SceneNode::group(
                format!("achievement-{index}"),
                vec![
                    SceneNode::shape(
                        format!("achievement-{index}-pill"),
                        Shape::RoundedRect {
                            width: 560.0,
                            height: 72.0,
                            radius: 36.0,
                        },
                        Fill::LinearGradient {
                            start: Color::from_rgb8(0xff, 0x6b, 0x6b),
                            end: Color::from_rgb8(0xff, 0xa5, 0x00),
                            angle_deg: 135.0,
                        },
                    ),
                    SceneNode::text(
                        format!("achievement-{index}-label"),
                        achievement.clone(),
                        28.0,
                        WHITE,
                    )
                    .weight(FontWeight::Bold),
                ],
            )
            .at(960.0, 430.0 + index as f64 * 100.0)
            .offset(0.0, slide_y)
            .with_opacity(opacity),
        );
    }

    Ok(SceneNode::group("achievements", children))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/user_stats.rs"]
mod tests;
