use super::is_void;
use crate::document::Document;
use crate::error::{DomError, Result};
use crate::node::{ElementData, NodeId, NodeKind};

impl Document {
    /// Parse markup into detached top-level nodes.
    pub fn parse_nodes(&mut self, markup: &str) -> Result<Vec<NodeId>> {
        let mut parser = Parser::new(markup);
        let nodes = parser.parse_nodes(self)?;
        if !parser.rest().is_empty() {
            return Err(parser.error("unexpected closing tag"));
        }
        Ok(nodes)
    }

    /// Parse markup holding exactly one element (surrounding whitespace is
    /// allowed) and return it detached.
    pub fn parse_fragment(&mut self, markup: &str) -> Result<NodeId> {
        let nodes = self.parse_nodes(markup)?;
        let mut significant = nodes.into_iter().filter(|&n| match self.kind(n) {
            Some(NodeKind::Text(text)) => !text.trim().is_empty(),
            _ => true,
        });
        match (significant.next(), significant.next()) {
            (Some(node), None) if self.is_element(node) => Ok(node),
            _ => Err(DomError::markup(0, "expected a single element")),
        }
    }

    /// Parse markup and append the resulting nodes to `parent`.
    pub fn append_markup(&mut self, parent: NodeId, markup: &str) -> Result<Vec<NodeId>> {
        let nodes = self.parse_nodes(markup)?;
        for &node in &nodes {
            self.append_child(parent, node)?;
        }
        Ok(nodes)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// A `<` followed by a letter or `!` starts markup; any other `<` is text.
/// Closing tags are handled by the caller.
fn starts_tag(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '!')
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn error(&self, message: impl Into<String>) -> DomError {
        DomError::markup(self.pos, message)
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Text up to the next `<` that opens a tag, closing tag or declaration.
    /// Never empty: the cursor is not at a tag when this is called.
    fn take_text(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(i, _)| starts_tag(&rest[i..]) || rest[i..].starts_with("</"))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += end;
        &rest[..end]
    }

    fn skip_past(&mut self, terminator: &str, what: &str) -> Result<()> {
        let end = self
            .rest()
            .find(terminator)
            .ok_or_else(|| self.error(format!("unterminated {what}")))?;
        self.pos += end + terminator.len();
        Ok(())
    }

    /// Sibling nodes up to the next closing tag or the end of input.
    fn parse_nodes(&mut self, doc: &mut Document) -> Result<Vec<NodeId>> {
        let mut nodes = Vec::new();
        while !self.rest().is_empty() && !self.rest().starts_with("</") {
            if self.eat("<!--") {
                self.skip_past("-->", "comment")?;
            } else if self.eat("<!") {
                self.skip_past(">", "declaration")?;
            } else if starts_tag(self.rest()) {
                nodes.push(self.parse_element(doc)?);
            } else {
                let raw = self.take_text();
                nodes.push(doc.create_text(decode_entities(raw)));
            }
        }
        Ok(nodes)
    }

    fn parse_element(&mut self, doc: &mut Document) -> Result<NodeId> {
        let start = self.pos;
        self.eat("<");
        let tag = self.take_while(is_name_char);
        if tag.is_empty() {
            return Err(self.error("expected tag name"));
        }

        let mut data = ElementData::new(tag);
        loop {
            self.skip_whitespace();
            if self.eat("/>") {
                return Ok(doc.create_element(data));
            }
            if self.eat(">") {
                break;
            }
            if self.rest().is_empty() {
                return Err(self.error(format!("unterminated <{tag}> tag")));
            }
            let name = self.take_while(is_name_char);
            if name.is_empty() {
                return Err(self.error("expected attribute name"));
            }
            self.skip_whitespace();
            let value = if self.eat("=") {
                self.skip_whitespace();
                self.parse_attr_value()?
            } else {
                String::new()
            };
            data.set_attr(name, value);
        }

        let id = doc.create_element(data);
        if is_void(tag) {
            return Ok(id);
        }

        for child in self.parse_nodes(doc)? {
            doc.append_child(id, child)?;
        }
        if !self.eat("</") {
            return Err(DomError::markup(start, format!("<{tag}> is never closed")));
        }
        let closing = self.take_while(is_name_char);
        if !closing.eq_ignore_ascii_case(tag) {
            return Err(self.error(format!("expected </{tag}>, found </{closing}>")));
        }
        self.skip_whitespace();
        if !self.eat(">") {
            return Err(self.error("expected '>'"));
        }
        Ok(id)
    }

    fn parse_attr_value(&mut self) -> Result<String> {
        for quote in ['"', '\''] {
            if self.rest().starts_with(quote) {
                self.pos += 1;
                let raw = self.take_while(|c| c != quote);
                if !self.eat(&quote.to_string()) {
                    return Err(self.error("unterminated attribute value"));
                }
                return Ok(decode_entities(raw));
            }
        }
        let raw = self.take_while(|c| !c.is_whitespace() && c != '>');
        Ok(decode_entities(raw))
    }
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ampersand_last() {
        assert_eq!(decode_entities("a &amp;lt; b"), "a &lt; b");
        assert_eq!(decode_entities("1 &lt; 2"), "1 < 2");
    }
}
