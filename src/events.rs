use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};

/// A single parse event in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    EndTag {
        name: String,
    },
    Text(String),
    Comment(String),
}

/// Run the tokenizer over `html` and hand every event to `emit`.
///
/// Adjacent character tokens are merged into one `Text` event. A start tag
/// written as `<tag/>` is followed by a synthetic `EndTag`.
pub fn tokenize<F>(html: &str, emit: F)
where
    F: FnMut(Event),
{
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(EventSink::new(emit), TokenizerOpts::default());
    // The sink never returns `TokenSinkResult::Script`, so feeding runs to the end.
    match tokenizer.feed(&mut input) {
        TokenizerResult::Done => {}
        TokenizerResult::Script(()) => log::trace!("tokenizer paused on a script"),
    }
    tokenizer.end();
}

struct EventSink<F> {
    emit: F,
    text: String,
}

impl<F: FnMut(Event)> EventSink<F> {
    fn new(emit: F) -> Self {
        Self {
            emit,
            text: String::new(),
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            (self.emit)(Event::Text(text));
        }
    }

    fn process_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();

        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .into_iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                (self.emit)(Event::StartTag {
                    name: name.clone(),
                    attrs,
                });

                if tag.self_closing {
                    (self.emit)(Event::EndTag { name });
                    return TokenSinkResult::Continue;
                }

                match Self::raw_kind(&name) {
                    Some(kind) => TokenSinkResult::RawData(kind),
                    None => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                (self.emit)(Event::EndTag { name });
                TokenSinkResult::Continue
            }
        }
    }

    // Without a tree builder the tokenizer never leaves the data state on
    // its own, so script/style bodies have to be switched to raw text here.
    fn raw_kind(name: &str) -> Option<RawKind> {
        match name {
            "script" => Some(RawKind::ScriptData),
            "style" => Some(RawKind::Rawtext),
            _ => None,
        }
    }
}

impl<F: FnMut(Event)> TokenSink for EventSink<F> {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                self.text.push_str(&text);
                TokenSinkResult::Continue
            }
            Token::NullCharacterToken => TokenSinkResult::Continue,
            Token::TagToken(tag) => {
                self.flush_text();
                self.process_tag(tag)
            }
            Token::CommentToken(comment) => {
                self.flush_text();
                (self.emit)(Event::Comment(comment.to_string()));
                TokenSinkResult::Continue
            }
            Token::DoctypeToken(_) | Token::EOFToken => {
                self.flush_text();
                TokenSinkResult::Continue
            }
            Token::ParseError(error) => {
                log::trace!("tokenizer error on line {line_number}: {error}");
                TokenSinkResult::Continue
            }
        }
    }

    fn end(&mut self) {
        self.flush_text();
    }
}
