//! Literal content driving every section.
//!
//! Nothing here is fetched or mutated at runtime. [`validate`] checks the
//! invariants the components rely on before the page renders.

use crate::components::icons::{
    ICON_CALENDAR, ICON_CHATS, ICON_GEAR, ICON_LIGHTNING, ICON_PHONE, ICON_ROBOT,
};
use crate::error::{Result, SiteError};
use crate::types::{
    Feature, FooterGroup, FooterLink, Logo, NavLink, Plan, SocialLink, SocialNetwork, Step,
    Testimonial, Tutorial,
};

/// How many times the partner logo strip repeats for the marquee loop.
pub const LOGO_REPEATS: usize = 3;

/// Links per footer category.
pub const FOOTER_LINKS_PER_GROUP: usize = 5;

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "How it works",
        href: "#how-it-works",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
    NavLink {
        label: "Testimonials",
        href: "#testimonials",
    },
];

pub const HERO_SCREENSHOT: Logo = Logo {
    src: "/assets/dashboard.png",
    alt: "Callwell dashboard showing today's answered calls",
};

pub const LOGOS: [Logo; 6] = [
    Logo {
        src: "/assets/logos/brightsmile-dental.svg",
        alt: "BrightSmile Dental",
    },
    Logo {
        src: "/assets/logos/harbor-legal.svg",
        alt: "Harbor Legal",
    },
    Logo {
        src: "/assets/logos/northpeak-realty.svg",
        alt: "NorthPeak Realty",
    },
    Logo {
        src: "/assets/logos/urban-paws-vet.svg",
        alt: "Urban Paws Vet",
    },
    Logo {
        src: "/assets/logos/coastline-hvac.svg",
        alt: "Coastline HVAC",
    },
    Logo {
        src: "/assets/logos/lumen-spa.svg",
        alt: "Lumen Spa",
    },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: ICON_PHONE,
        title: "Answers every call",
        description: "Picks up on the first ring, day or night, and greets callers in your brand voice. No hold music, no voicemail.",
        gradient: "gradient-violet",
    },
    Feature {
        icon: ICON_CALENDAR,
        title: "Books appointments",
        description: "Checks your calendar in real time and books, reschedules or cancels without a human in the loop.",
        gradient: "gradient-cyan",
    },
    Feature {
        icon: ICON_CHATS,
        title: "Summarizes every conversation",
        description: "Sends a short transcript and the caller's intent to your inbox or CRM the moment the call ends.",
        gradient: "gradient-amber",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        icon: ICON_GEAR,
        title: "Tell us about your business",
        description: "Share your hours, services and FAQs. Callwell learns them in minutes.",
    },
    Step {
        number: 2,
        icon: ICON_ROBOT,
        title: "Pick a voice",
        description: "Choose from natural-sounding voices and set the tone callers hear.",
    },
    Step {
        number: 3,
        icon: ICON_LIGHTNING,
        title: "Forward your number",
        description: "Point your existing line at Callwell and go live the same day.",
    },
];

pub const TUTORIALS: [Tutorial; 2] = [
    Tutorial {
        title: "Set up Callwell in 5 minutes",
        description: "From signup to your first answered call.",
        duration: "4:12",
        thumbnail: Some("/assets/tutorials/setup.jpg"),
        href: "https://youtube.com/@callwell",
    },
    Tutorial {
        title: "Connecting your calendar",
        description: "Sync Google or Outlook so Callwell can book for you.",
        duration: "2:48",
        thumbnail: None,
        href: "https://youtube.com/@callwell",
    },
];

pub const PLANS: [Plan; 2] = [
    Plan {
        name: "Starter",
        description: "For solo practices and small shops.",
        monthly_price: 49,
        annual_price: 39,
        features: &[
            "Up to 200 calls / month",
            "Appointment booking",
            "Email call summaries",
            "Business-hours greeting",
        ],
        cta: "Start free trial",
        popular: false,
        gradient: "gradient-cyan",
    },
    Plan {
        name: "Professional",
        description: "For busy teams that live on the phone.",
        monthly_price: 149,
        annual_price: 119,
        features: &[
            "Unlimited calls",
            "Calendar and CRM integrations",
            "Custom voice and scripts",
            "Call transfer to staff",
            "Priority support",
        ],
        cta: "Start free trial",
        popular: true,
        gradient: "gradient-violet",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We stopped losing after-hours patients overnight. Callwell books them before we open.",
        author: "Dr. Priya Raman",
        role: "Owner",
        company: "BrightSmile Dental",
    },
    Testimonial {
        quote: "Callers genuinely can't tell it's not one of us. The summaries alone save an hour a day.",
        author: "Marcus Lee",
        role: "Office Manager",
        company: "Harbor Legal",
    },
    Testimonial {
        quote: "Setup took one afternoon. Our missed-call rate went from 30% to zero.",
        author: "Elena Ortiz",
        role: "Operations Lead",
        company: "Coastline HVAC",
    },
];

pub const FOOTER_GROUPS: [FooterGroup; 3] = [
    FooterGroup {
        title: "Product",
        links: &[
            FooterLink {
                label: "Features",
                href: "#features",
            },
            FooterLink {
                label: "How it works",
                href: "#how-it-works",
            },
            FooterLink {
                label: "Pricing",
                href: "#pricing",
            },
            FooterLink {
                label: "Integrations",
                href: "/integrations",
            },
            FooterLink {
                label: "Changelog",
                href: "/changelog",
            },
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            FooterLink {
                label: "About",
                href: "/about",
            },
            FooterLink {
                label: "Customers",
                href: "#testimonials",
            },
            FooterLink {
                label: "Careers",
                href: "/careers",
            },
            FooterLink {
                label: "Blog",
                href: "/blog",
            },
            FooterLink {
                label: "Contact",
                href: "/contact",
            },
        ],
    },
    FooterGroup {
        title: "Legal",
        links: &[
            FooterLink {
                label: "Privacy",
                href: "/legal/privacy",
            },
            FooterLink {
                label: "Terms",
                href: "/legal/terms",
            },
            FooterLink {
                label: "Security",
                href: "/legal/security",
            },
            FooterLink {
                label: "Cookies",
                href: "/legal/cookies",
            },
            FooterLink {
                label: "DPA",
                href: "/legal/dpa",
            },
        ],
    },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        network: SocialNetwork::X,
        href: "https://x.com/callwell",
    },
    SocialLink {
        network: SocialNetwork::LinkedIn,
        href: "https://linkedin.com/company/callwell",
    },
    SocialLink {
        network: SocialNetwork::GitHub,
        href: "https://github.com/callwell",
    },
    SocialLink {
        network: SocialNetwork::YouTube,
        href: "https://youtube.com/@callwell",
    },
];

/// Repeat `items` [`LOGO_REPEATS`] times, keeping order within each pass.
pub fn looped<T: Copy>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * LOGO_REPEATS);
    for _ in 0..LOGO_REPEATS {
        out.extend_from_slice(items);
    }
    out
}

/// Check the shipped tables.
pub fn validate() -> Result<()> {
    validate_plans(&PLANS)?;
    validate_footer(&FOOTER_GROUPS)?;
    if LOGOS.is_empty() {
        return Err(SiteError::content("social proof", "no partner logos"));
    }
    for (idx, step) in STEPS.iter().enumerate() {
        if usize::from(step.number) != idx + 1 {
            return Err(SiteError::content(
                "how it works",
                format!("step {:?} is numbered {}", step.title, step.number),
            ));
        }
    }
    Ok(())
}

pub fn validate_plans(plans: &[Plan]) -> Result<()> {
    if plans.is_empty() {
        return Err(SiteError::content("pricing", "no plans"));
    }
    if plans.iter().filter(|p| p.popular).count() > 1 {
        return Err(SiteError::content("pricing", "more than one plan marked popular"));
    }
    for plan in plans {
        if plan.annual_price > plan.monthly_price {
            return Err(SiteError::content(
                "pricing",
                format!(
                    "{} costs more per month billed annually (${}) than monthly (${})",
                    plan.name, plan.annual_price, plan.monthly_price
                ),
            ));
        }
        if plan.features.is_empty() {
            return Err(SiteError::content("pricing", format!("{} lists no features", plan.name)));
        }
    }
    Ok(())
}

pub fn validate_footer(groups: &[FooterGroup]) -> Result<()> {
    for group in groups {
        if group.links.len() != FOOTER_LINKS_PER_GROUP {
            return Err(SiteError::content(
                "footer",
                format!(
                    "{} has {} links, expected {}",
                    group.title,
                    group.links.len(),
                    FOOTER_LINKS_PER_GROUP
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_content_is_valid() {
        validate().expect("shipped content validates");
    }

    #[test]
    fn looped_triples_in_order() {
        let strip = looped(&LOGOS);
        assert_eq!(strip.len(), LOGOS.len() * 3);
        for pass in strip.chunks(LOGOS.len()) {
            assert_eq!(pass, &LOGOS[..]);
        }
    }

    #[test]
    fn looped_empty_stays_empty() {
        let strip: Vec<u8> = looped(&[]);
        assert!(strip.is_empty());
    }

    #[test]
    fn footer_has_three_fixed_groups() {
        let titles: Vec<_> = FOOTER_GROUPS.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Product", "Company", "Legal"]);
        assert!(FOOTER_GROUPS.iter().all(|g| g.links.len() == 5));
    }

    #[test]
    fn annual_price_above_monthly_is_rejected() {
        let mut plans = PLANS;
        plans[0].annual_price = plans[0].monthly_price + 1;
        let err = validate_plans(&plans).unwrap_err();
        assert!(matches!(err, SiteError::Content { section: "pricing", .. }));
        assert!(err.to_string().contains("Starter"));
    }

    #[test]
    fn two_popular_plans_are_rejected() {
        let mut plans = PLANS;
        plans[0].popular = true;
        assert!(validate_plans(&plans).is_err());
    }

    #[test]
    fn short_footer_group_is_rejected() {
        let groups = [FooterGroup {
            title: "Legal",
            links: &[FooterLink {
                label: "Privacy",
                href: "/legal/privacy",
            }],
        }];
        let err = validate_footer(&groups).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid footer content: Legal has 1 links, expected 5"
        );
    }

    #[test]
    fn nav_anchors_point_at_section_ids() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec!["#features", "#how-it-works", "#pricing", "#testimonials"]
        );
    }
}
