//! Hero banner: brand row, title, subtitle, buttons and the demo image.

use crate::assets::EncodedAsset;

/// Title markup; line breaks are part of the design.
pub const HERO_TITLE: &str = "Your Business<br>Optimization<br>Engine";

pub const BRAND_NAME: &str = "Second Brain";

pub const HERO_STYLE: &str = r#"
<style>
  .hero-transparent {
    background: transparent;
    border: none;
    padding: 4rem 2rem 3rem;
    color: #fff;
  }

  .hero-container {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2.5rem;
    flex-wrap: wrap;
    background: transparent;
  }

  .hero-left {
    flex: 1 1 48%;
    min-width: 320px;
    text-align: left;
    background: transparent;
  }

  .brand {
    display: flex;
    align-items: center;
    gap: .6rem;
    margin-bottom: 1.25rem;
    background: transparent;
  }

  .brand img {
    width: 32px;
    height: 32px;
    filter: brightness(0) invert(1);
  }

  .brand .name {
    font-weight: 700;
    color: #fff;
    font-size: 1.15rem;
  }

  .hero-title {
    font-size: clamp(2.4rem, 6vw, 4.5rem);
    font-weight: 800;
    line-height: 1.05;
    margin-bottom: 1rem;
    text-align: left;
    background: transparent;
  }

  .hero-subtitle {
    margin: 0 0 2rem;
    color: rgba(255,255,255,.9);
    font-size: 1.1rem;
    max-width: 500px;
    background: transparent;
  }

  .hero-buttons {
    display: flex;
    gap: .75rem;
    flex-wrap: wrap;
    margin-bottom: 1.5rem;
    background: transparent;
  }

  .btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: .8rem 1.2rem;
    border-radius: .75rem;
    font-weight: 700;
    text-decoration: none;
    border: 1px solid transparent;
    transition: 0.2s;
  }

  .btn-primary { background: #fff; color: #0ea5e9; }
  .btn-secondary { background: #fff; color: #0ea5e9; }
  .btn-primary:hover, .btn-secondary:hover { background: #f0f9ff; }

  .mini-feats {
    display: flex;
    gap: 1.25rem;
    flex-wrap: wrap;
    color: rgba(255,255,255,0.9);
    font-size: 0.95rem;
    background: transparent;
  }

  .hero-right {
    flex: 1 1 46%;
    min-width: 300px;
    text-align: right;
    background: transparent;
  }

  .hero-right img {
    max-width: 100%;
    height: auto;
    border-radius: 1rem;
    box-shadow: 0 12px 40px rgba(0,0,0,0.35);
  }

  .hero-actions {
    max-width: 1200px;
    margin: 1.5rem auto 0;
    display: flex;
    gap: .75rem;
  }
</style>
"#;

/// Build the hero markup around the two encoded assets.
pub fn hero_markup(logo: &EncodedAsset, demo: &EncodedAsset) -> String {
    format!(
        r##"
<div class="hero-transparent">
  <div class="hero-container">
    <div class="hero-left">
      <div class="brand">
        <img src="{logo}" alt="{brand} logo" />
        <div class="name">{brand}</div>
      </div>
      <div class="hero-title">{title}</div>
      <div class="hero-subtitle">
        Skip the prescriptive processes. Let AI make intelligent decisions for your business.
        From inventory optimization to operational efficiency – your second brain handles it all.
      </div>
      <div class="hero-buttons">
        <a href="#" class="btn btn-primary">Get Started Today →</a>
        <a href="#" class="btn btn-secondary">Watch Demo</a>
      </div>
      <div class="mini-feats">
        <span>📊 Real-time Analytics</span>
        <span>⚡ Instant Optimization</span>
      </div>
    </div>
    <div class="hero-right">
      <img src="{demo}" alt="{brand} product demo" />
    </div>
  </div>
</div>
"##,
        logo = logo.data_uri(),
        demo = demo.data_uri(),
        brand = BRAND_NAME,
        title = HERO_TITLE,
    )
}
