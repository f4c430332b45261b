//! Navigation state: active section, scrolled flag, mobile menu.
//!
//! The controller is plain synchronous state driven by three kinds of
//! signal: scroll offsets, intersection batches and explicit navigation
//! requests. The browser runs the same rules from [`NAV_JS`], configured by
//! [`NavConfig`].

use serde::Serialize;

use crate::models::portfolio::NavItem;

pub const HOME_ID: &str = "home";

pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "Home"),
        NavItem::new("about", "About"),
        NavItem::new("skills", "Skills"),
        NavItem::new("projects", "Projects"),
        NavItem::new("experience", "Experience"),
        NavItem::new("education", "Education"),
        NavItem::new("contact", "Contact"),
    ]
}

/// Tunables shared by the Rust controller and the browser script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    pub header_offset: f64,
    pub scroll_threshold: f64,
    /// Trigger band as fractions of the viewport height, measured from the top.
    pub band_top: f64,
    pub band_bottom: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            header_offset: 80.0,
            scroll_threshold: 10.0,
            band_top: 0.2,
            band_bottom: 0.3,
        }
    }
}

/// Position of one section anchor relative to the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorRect {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// The page as the controller sees it.
pub trait Viewport {
    /// Document offset of the anchor with `id`, if it exists.
    fn anchor_top(&self, id: &str) -> Option<f64>;
    /// Smooth-scroll the document so `top` is at the viewport top.
    fn scroll_to(&mut self, top: f64);
    fn add_scroll_listener(&mut self);
    fn remove_scroll_listener(&mut self);
    fn observe(&mut self, ids: &[String]);
    fn disconnect_observer(&mut self);
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    config: NavConfig,
    items: Vec<NavItem>,
    active_section: String,
    is_scrolled: bool,
    is_mobile_menu_open: bool,
}

impl NavigationController {
    /// Start on the first item (home for the default set).
    pub fn new(items: Vec<NavItem>, config: NavConfig) -> Self {
        let items = if items.is_empty() { default_items() } else { items };
        let active_section = items
            .first()
            .map(|i| i.id.clone())
            .unwrap_or_else(|| HOME_ID.to_string());
        NavigationController {
            config,
            items,
            active_section,
            is_scrolled: false,
            is_mobile_menu_open: false,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.is_scrolled = scroll_y > self.config.scroll_threshold;
    }

    /// Pick the active section from one batch of anchor positions.
    ///
    /// Of the anchors overlapping the trigger band, the one whose top edge is
    /// closest to the band's top line wins; ties go to the earlier nav item.
    /// A batch with nothing in the band changes nothing.
    pub fn on_intersections(&mut self, anchors: &[AnchorRect], viewport_height: f64) {
        let line = viewport_height * self.config.band_top;
        let band_end = viewport_height * self.config.band_bottom;

        let winner = anchors
            .iter()
            .filter(|a| a.top < band_end && a.bottom > line)
            .min_by(|a, b| {
                let da = (a.top - line).abs();
                let db = (b.top - line).abs();
                da.total_cmp(&db)
                    .then_with(|| self.order_of(&a.id).cmp(&self.order_of(&b.id)))
            });

        if let Some(anchor) = winner {
            self.active_section = anchor.id.clone();
        }
    }

    fn order_of(&self, id: &str) -> usize {
        self.items
            .iter()
            .position(|i| i.id == id)
            .unwrap_or(usize::MAX)
    }

    /// Explicit navigation: mark active, close the mobile menu, scroll the
    /// anchor to `header_offset` below the top. Returns the scroll target.
    pub fn navigate(&mut self, id: &str, viewport: &mut dyn Viewport) -> Option<f64> {
        self.active_section = id.to_string();
        self.close_mobile_menu();

        let target = match viewport.anchor_top(id) {
            Some(top) => Some(top - self.config.header_offset),
            None if id == HOME_ID => Some(0.0),
            None => None,
        };
        if let Some(top) = target {
            viewport.scroll_to(top);
        }
        target
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    /// Backdrop click.
    pub fn close_mobile_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    /// Register scroll and intersection listeners. They are removed when the
    /// returned handle is dropped.
    pub fn mount<'v, V: Viewport + ?Sized>(&mut self, viewport: &'v mut V) -> MountedNav<'_, 'v, V> {
        viewport.add_scroll_listener();
        let ids: Vec<String> = self.items.iter().map(|i| i.id.clone()).collect();
        viewport.observe(&ids);
        MountedNav {
            controller: self,
            viewport,
        }
    }
}

/// A controller attached to a viewport.
pub struct MountedNav<'c, 'v, V: Viewport + ?Sized> {
    controller: &'c mut NavigationController,
    viewport: &'v mut V,
}

impl<V: Viewport + ?Sized> MountedNav<'_, '_, V> {
    pub fn controller(&self) -> &NavigationController {
        self.controller
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.controller.on_scroll(scroll_y);
    }

    pub fn on_intersections(&mut self, anchors: &[AnchorRect], viewport_height: f64) {
        self.controller.on_intersections(anchors, viewport_height);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.controller.toggle_mobile_menu();
    }

    pub fn close_mobile_menu(&mut self) {
        self.controller.close_mobile_menu();
    }
}

impl<V: Viewport> MountedNav<'_, '_, V> {
    pub fn navigate(&mut self, id: &str) -> Option<f64> {
        self.controller.navigate(id, &mut *self.viewport)
    }
}

impl<V: Viewport + ?Sized> Drop for MountedNav<'_, '_, V> {
    fn drop(&mut self) {
        self.viewport.remove_scroll_listener();
        self.viewport.disconnect_observer();
    }
}

/// Browser side of the controller. Reads its settings from
/// `<script id="nav-config" type="application/json">`.
pub const NAV_JS: &str = r#"<script>
(function(){
  var cfg = JSON.parse(document.getElementById('nav-config').textContent);
  var nav = document.querySelector('.site-nav');
  var menu = document.querySelector('.mobile-menu');
  var ids = cfg.items.map(function(i){ return i.id; });
  function setActive(id){
    document.querySelectorAll('[data-nav-item]').forEach(function(el){
      el.classList.toggle('active', el.getAttribute('data-nav-item') === id);
    });
  }
  function setMenu(open){
    if (!menu) return;
    menu.classList.toggle('open', open);
    document.querySelectorAll('.menu-toggle').forEach(function(b){
      b.setAttribute('aria-expanded', open ? 'true' : 'false');
      b.setAttribute('aria-label', open ? 'Close menu' : 'Open menu');
    });
  }
  function onScroll(){ nav.classList.toggle('scrolled', window.scrollY > cfg.scrollThreshold); }
  function navigate(id){
    setActive(id);
    setMenu(false);
    var el = document.getElementById(id);
    if (el) {
      window.scrollTo({ top: el.getBoundingClientRect().top + window.scrollY - cfg.headerOffset, behavior: 'smooth' });
    } else if (id === 'home') {
      window.scrollTo({ top: 0, behavior: 'smooth' });
    }
  }
  function pick(){
    var h = window.innerHeight, line = h * cfg.bandTop, end = h * cfg.bandBottom, best = null, bestDist = Infinity;
    ids.forEach(function(id){
      var el = document.getElementById(id);
      if (!el) return;
      var r = el.getBoundingClientRect();
      if (r.top < end && r.bottom > line) {
        var d = Math.abs(r.top - line);
        if (d < bestDist) { best = id; bestDist = d; }
      }
    });
    if (best) setActive(best);
  }
  var observer = new IntersectionObserver(pick, { rootMargin: '-' + (cfg.bandTop * 100) + '% 0px -' + ((1 - cfg.bandBottom) * 100) + '% 0px', threshold: 0 });
  ids.forEach(function(id){ var el = document.getElementById(id); if (el) observer.observe(el); });
  window.addEventListener('scroll', onScroll);
  window.addEventListener('pagehide', function(){ observer.disconnect(); window.removeEventListener('scroll', onScroll); });
  document.addEventListener('click', function(e){
    var t = e.target.closest('[data-nav]');
    if (t) { e.preventDefault(); navigate(t.getAttribute('data-nav')); return; }
    if (e.target.closest('.menu-toggle')) { setMenu(!menu.classList.contains('open')); return; }
    if (e.target.closest('.menu-backdrop')) setMenu(false);
  });
  onScroll();
})();
</script>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        anchors: HashMap<String, f64>,
        scrolls: Vec<f64>,
        listening: bool,
        observed: Vec<String>,
    }

    impl FakeViewport {
        fn with(anchors: &[(&str, f64)]) -> Self {
            FakeViewport {
                anchors: anchors.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn anchor_top(&self, id: &str) -> Option<f64> {
            self.anchors.get(id).copied()
        }
        fn scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }
        fn add_scroll_listener(&mut self) {
            self.listening = true;
        }
        fn remove_scroll_listener(&mut self) {
            self.listening = false;
        }
        fn observe(&mut self, ids: &[String]) {
            self.observed = ids.to_vec();
        }
        fn disconnect_observer(&mut self) {
            self.observed.clear();
        }
    }

    fn rect(id: &str, top: f64, bottom: f64) -> AnchorRect {
        AnchorRect {
            id: id.into(),
            top,
            bottom,
        }
    }

    fn controller() -> NavigationController {
        NavigationController::new(default_items(), NavConfig::default())
    }

    #[test]
    fn initial_state() {
        let nav = controller();
        assert_eq!(nav.active_section(), "home");
        assert!(!nav.is_scrolled());
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn custom_items_start_on_first() {
        let nav = NavigationController::new(
            vec![NavItem::new("intro", "Intro"), NavItem::new("work", "Work")],
            NavConfig::default(),
        );
        assert_eq!(nav.active_section(), "intro");
        assert_eq!(NavigationController::new(vec![], NavConfig::default()).items().len(), 7);
    }

    #[test]
    fn scroll_threshold() {
        let mut nav = controller();
        nav.on_scroll(10.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(10.5);
        assert!(nav.is_scrolled());
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn navigate_offsets_by_header() {
        let mut nav = controller();
        let mut vp = FakeViewport::with(&[("projects", 1200.0)]);
        let target = nav.navigate("projects", &mut vp);
        assert_eq!(nav.active_section(), "projects");
        assert_eq!(target, Some(1120.0));
        assert_eq!(vp.scrolls, vec![1120.0]);
        // the anchor ends up exactly header_offset below the viewport top
        assert_eq!(1200.0 - vp.scrolls[0], nav.config().header_offset);
    }

    #[test]
    fn home_without_anchor_scrolls_to_top() {
        let mut nav = controller();
        let mut vp = FakeViewport::default();
        assert_eq!(nav.navigate("home", &mut vp), Some(0.0));
        assert_eq!(vp.scrolls, vec![0.0]);
    }

    #[test]
    fn unknown_anchor_does_not_scroll() {
        let mut nav = controller();
        let mut vp = FakeViewport::default();
        assert_eq!(nav.navigate("blog", &mut vp), None);
        assert!(vp.scrolls.is_empty());
        assert_eq!(nav.active_section(), "blog");
    }

    #[test]
    fn navigating_closes_mobile_menu() {
        let mut nav = controller();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        let mut vp = FakeViewport::with(&[("skills", 900.0)]);
        nav.navigate("skills", &mut vp);
        assert!(!nav.is_mobile_menu_open());
        assert_eq!(nav.active_section(), "skills");
    }

    #[test]
    fn backdrop_closes_menu_without_moving() {
        let mut nav = controller();
        let mut vp = FakeViewport::with(&[("about", 700.0)]);
        let mut mounted = nav.mount(&mut vp);
        mounted.toggle_mobile_menu();
        assert!(mounted.controller().is_mobile_menu_open());
        mounted.close_mobile_menu();
        mounted.close_mobile_menu();
        assert!(!mounted.controller().is_mobile_menu_open());
        assert_eq!(mounted.controller().active_section(), "home");
        drop(mounted);
        assert!(vp.scrolls.is_empty());
    }

    #[test]
    fn closest_to_trigger_line_wins() {
        let mut nav = controller();
        // viewport 1000px: line at 200, band ends at 300
        nav.on_intersections(
            &[
                rect("about", -400.0, 250.0),
                rect("skills", 190.0, 900.0),
                rect("projects", 290.0, 1200.0),
            ],
            1000.0,
        );
        assert_eq!(nav.active_section(), "skills");
    }

    #[test]
    fn batch_order_does_not_matter() {
        let anchors = [rect("projects", 260.0, 900.0), rect("skills", 120.0, 260.0)];
        let mut reversed = anchors.to_vec();
        reversed.reverse();

        let mut a = controller();
        a.on_intersections(&anchors, 1000.0);
        let mut b = controller();
        b.on_intersections(&reversed, 1000.0);
        assert_eq!(a.active_section(), "projects");
        assert_eq!(b.active_section(), "projects");
    }

    #[test]
    fn ties_go_to_earlier_item() {
        let mut nav = controller();
        nav.on_intersections(
            &[rect("education", 250.0, 800.0), rect("experience", 150.0, 250.0)],
            1000.0,
        );
        assert_eq!(nav.active_section(), "experience");
    }

    #[test]
    fn nothing_in_band_keeps_active() {
        let mut nav = controller();
        nav.on_intersections(&[rect("about", 500.0, 900.0), rect("skills", -900.0, 100.0)], 1000.0);
        assert_eq!(nav.active_section(), "home");
    }

    #[test]
    fn mount_registers_and_drop_releases() {
        let mut nav = controller();
        let mut vp = FakeViewport::with(&[("contact", 3000.0)]);
        {
            let mut mounted = nav.mount(&mut vp);
            mounted.on_scroll(50.0);
            assert_eq!(mounted.navigate("contact"), Some(2920.0));
            assert!(mounted.controller().is_scrolled());
        }
        assert!(!vp.listening);
        assert!(vp.observed.is_empty());
        assert_eq!(vp.scrolls.len(), 1);
        assert_eq!(nav.active_section(), "contact");
    }
}
