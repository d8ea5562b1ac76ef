//! Closing call-to-action section.

pub const CTA_MARKUP: &str = r##"
<div class="cta-section" style="margin-top: 4rem; text-align: center;">
    <h2 class="cta-title" style="font-size: 2.5rem; color: var(--gray-900); font-weight: 700;">
        Ready to Build Your<br>
        <span style="color: #ffffff;">Second Brain?</span>
    </h2>
    <p class="cta-subtitle" style="color: #475569; max-width: 700px; margin: 1rem auto;">
        Join forward-thinking businesses that have eliminated manual decision-making.
        Start optimizing your operations with AI today.
    </p>
    <div class="hero-buttons" style="justify-content: center;">
        <a href="#" class="btn btn-primary">Start Free Trial →</a>
        <a href="#" class="btn btn-secondary">Schedule Demo</a>
    </div>
</div>
"##;
