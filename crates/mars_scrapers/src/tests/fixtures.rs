//! A miniature copy of the five target pages.

use mars_core::ScrapeConfig;
use std::collections::HashSet;
use std::time::Duration;
use crate::scrapers::featured_image::BUTTON;
use crate::scrapers::hemisphere::THUMBNAIL;
use super::fakes::{ClickEffect, FakeFetcher, FakePage, FakeSite};

pub const NEWS_URL: &str = "https://news.example.com/index.html";
pub const IMAGE_URL: &str = "https://images.example.com/index.html";
pub const IMAGE_BASE_URL: &str = "https://images.example.com/";
pub const FACTS_URL: &str = "https://facts.example.com/index.html";
pub const HEMISPHERE_URL: &str = "https://hemispheres.example.com/";

pub const NEWS_PAGE: &str = r#"
<html><body>
  <div class="list_text">
    <div class="list_date">March 3, 2021</div>
    <div class="content_title"> NASA's Perseverance Rover Lands </div>
    <div class="article_teaser_body">The rover touched down in Jezero Crater.</div>
  </div>
  <div class="list_text">
    <div class="content_title">Older story</div>
    <div class="article_teaser_body">Not this one.</div>
  </div>
</body></html>
"#;

pub const IMAGE_PAGE: &str = r#"
<html><body>
  <div class="header"><button class="btn menu">Menu</button></div>
  <div class="floating_text_area">
    <h2 class="brand_title">Dusty Dunes</h2>
    <button class="btn btn-outline-light"> FULL IMAGE</button>
  </div>
  <img class="headerimage fade-in" src="image/featured/mars2_thumb.jpg">
</body></html>
"#;

pub const IMAGE_PAGE_REVEALED: &str = r#"
<html><body>
  <div class="header"><button class="btn menu">Menu</button></div>
  <div class="floating_text_area">
    <button class="btn btn-outline-light"> FULL IMAGE</button>
  </div>
  <div class="fancybox-container">
    <img class="fancybox-image" src="image/featured/mars2.jpg" alt="">
  </div>
</body></html>
"#;

pub const FACTS_PAGE: &str = r#"
<html><body>
  <table class="table table-striped">
    <tbody>
      <tr><td>Mars - Earth Comparison</td><td>Mars</td><td>Earth</td></tr>
      <tr><td>Diameter:</td><td>6,779 km</td><td>12,742 km</td></tr>
      <tr><td>Mass:</td><td>6.39 × 10^23 kg</td><td>5.97 × 10^24 kg</td></tr>
      <tr><td>Moons:</td><td>2</td><td>1</td></tr>
    </tbody>
  </table>
</body></html>
"#;

pub const HEMISPHERES: [(&str, &str); 3] = [
    ("Cerberus Hemisphere Enhanced", "cerberus"),
    ("Schiaparelli Hemisphere Enhanced", "schiaparelli"),
    ("Syrtis Major Hemisphere Enhanced", "syrtis"),
];

pub fn config() -> ScrapeConfig {
    ScrapeConfig {
        news_url: NEWS_URL.to_string(),
        image_url: IMAGE_URL.to_string(),
        image_base_url: IMAGE_BASE_URL.to_string(),
        facts_url: FACTS_URL.to_string(),
        hemisphere_url: HEMISPHERE_URL.to_string(),
        news_wait: Duration::from_millis(10),
        op_timeout: Duration::from_millis(500),
        ..ScrapeConfig::default()
    }
}

pub fn gallery_page(items: &[(&str, &str)]) -> String {
    let mut html = String::from(r#"<html><body><div class="collapsible results">"#);
    for (title, slug) in items {
        html.push_str(&format!(
            r#"<div class="item">
                 <a href="{slug}.html" class="itemLink product-item"><img class="thumb" src="images/{slug}_thumb.png"></a>
                 <div class="description"><a href="{slug}.html" class="itemLink product-item"><h3>{title}</h3></a></div>
               </div>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

pub fn detail_page(title: &str, slug: &str) -> String {
    format!(
        r#"<html><body>
             <div class="downloads"><ul>
               <li><a target="_blank" href="images/{slug}_full.jpg">Sample</a> (jpg) 1024px wide</li>
               <li><a target="_blank" href="images/{slug}.tif">Original</a> (tif)</li>
             </ul></div>
             <div class="cover"><h2 class="title">{title}</h2></div>
           </body></html>"#
    )
}

/// Adds one gallery rendition per entry of `renditions`, each thumbnail
/// linking to its own detail page.
pub fn gallery_site(mut site: FakeSite, renditions: &[&[(&str, &str)]]) -> FakeSite {
    let mut details = HashSet::new();
    for items in renditions {
        let mut gallery = FakePage::new(gallery_page(items));
        for (i, (title, slug)) in items.iter().enumerate() {
            let url = format!("{}{}.html", HEMISPHERE_URL, slug);
            gallery = gallery.on_click(THUMBNAIL, i, ClickEffect::Navigate(url.clone()));
            if details.insert(url.clone()) {
                site = site.page(&url, FakePage::new(detail_page(title, slug)));
            }
        }
        site = site.page(HEMISPHERE_URL, gallery);
    }
    site
}

/// All browser-driven pages, healthy.
pub fn site() -> FakeSite {
    let image = FakePage::new(IMAGE_PAGE)
        .on_click(BUTTON, 1, ClickEffect::Reveal(IMAGE_PAGE_REVEALED.to_string()));
    let site = FakeSite::new()
        .page(NEWS_URL, FakePage::new(NEWS_PAGE))
        .page(IMAGE_URL, image);
    gallery_site(site, &[&HEMISPHERES[..]])
}

pub fn fetcher() -> FakeFetcher {
    FakeFetcher::new().page(FACTS_URL, FACTS_PAGE)
}
