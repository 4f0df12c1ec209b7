use std::collections::BTreeMap;

/// Stable element ids of the widget's display surfaces.
pub mod ids {
    pub const CURRENT_TEMP: &str = "current-temp";
    pub const CURRENT_CONDITION: &str = "current-condition";
    pub const FEELS_LIKE: &str = "feels-like";
    pub const HUMIDITY: &str = "humidity";
    pub const CURRENT_ICON: &str = "current-icon";
    pub const HOURLY_FORECAST: &str = "hourly-forecast";
    pub const PRECIP_CHANCE: &str = "precip-chance";
    pub const CHANCE_TEXT: &str = "chance-text";
    pub const ALERT_MESSAGE: &str = "alert-message";
    pub const ALERT_TIME: &str = "alert-time";
    pub const ACCURACY_SLIDER: &str = "accuracy-slider";
    pub const BLURRY_MAP: &str = "comparison-map-blurry";
    pub const SHARP_MAP: &str = "comparison-map-sharp";
}

/// Write-only view of the display tree.
pub trait Surface {
    fn set_text(&mut self, id: &str, text: &str);
    fn set_style(&mut self, id: &str, property: &str, value: &str);
    fn set_class(&mut self, id: &str, class: &str);
    fn clear_children(&mut self, id: &str);
    fn append_child(&mut self, id: &str, child: Node);
}

/// Detached display item appended under a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub class: String,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// First descendant (depth first, self included) carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Node> {
        if self.class == class {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub text: String,
    pub class: String,
    pub style: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

/// In-memory display tree keyed by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Text of `id`, empty when the surface was never written.
    pub fn text(&self, id: &str) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn class(&self, id: &str) -> &str {
        self.element(id).map(|e| e.class.as_str()).unwrap_or("")
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.element(id)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn children(&self, id: &str) -> &[Node] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Every written text, ordered by element id.
    pub fn texts(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .filter(|(_, e)| !e.text.is_empty())
            .map(|(id, e)| (id.as_str(), e.text.as_str()))
            .collect()
    }

    fn entry(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }
}

impl Surface for Document {
    fn set_text(&mut self, id: &str, text: &str) {
        self.entry(id).text = text.to_string();
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        self.entry(id)
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn set_class(&mut self, id: &str, class: &str) {
        self.entry(id).class = class.to_string();
    }

    fn clear_children(&mut self, id: &str) {
        self.entry(id).children.clear();
    }

    fn append_child(&mut self, id: &str, child: Node) {
        self.entry(id).children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_records_writes() {
        let mut doc = Document::new();
        doc.set_text(ids::HUMIDITY, "68%");
        doc.set_style(ids::PRECIP_CHANCE, "width", "85%");
        doc.set_class(ids::CURRENT_ICON, "fas fa-sun");

        assert_eq!(doc.text(ids::HUMIDITY), "68%");
        assert_eq!(doc.style(ids::PRECIP_CHANCE, "width"), Some("85%"));
        assert_eq!(doc.class(ids::CURRENT_ICON), "fas fa-sun");
        assert_eq!(doc.text(ids::ALERT_TIME), "");
        assert_eq!(doc.style(ids::ALERT_TIME, "opacity"), None);
    }

    #[test]
    fn test_children_clear_and_append() {
        let mut doc = Document::new();
        doc.append_child(ids::HOURLY_FORECAST, Node::new("hourly-item"));
        doc.append_child(ids::HOURLY_FORECAST, Node::new("hourly-item"));
        assert_eq!(doc.children(ids::HOURLY_FORECAST).len(), 2);

        doc.clear_children(ids::HOURLY_FORECAST);
        assert!(doc.children(ids::HOURLY_FORECAST).is_empty());
    }

    #[test]
    fn test_node_find_descends() {
        let node = Node::new("hourly-item")
            .with_child(Node::new("hourly-time").with_text("1PM"))
            .with_child(Node::new("hourly-icon").with_child(Node::new("fas fa-sun")));
        assert_eq!(node.find("hourly-time").map(|n| n.text.as_str()), Some("1PM"));
        assert!(node.find("fas fa-sun").is_some());
        assert!(node.find("hourly-temp").is_none());
    }
}
