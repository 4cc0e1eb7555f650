use sealed::sealed;
use serde::Serialize;
use std::fmt;

use crate::dependency::UniversalDependencyRelation;
use crate::entity::NamedEntityType;
use crate::error::AnnotationResult;
use crate::json::ToJson;
use crate::layer::{Layer, PolarityType, ViewLayer};
use crate::morphology::{MetamorphicParse, MorphologicalParse, MorphologicalTag};
use crate::resources::Gazetteer;
use crate::role::{Argument, FrameElement};
use crate::slot::Slot;
use crate::types::*;

/// A word and its annotation layers. Every layer is independently optional: a word fresh
/// from a tokenizer carries only its surface form, a fully annotated word carries all
/// ten layers. Layers are either absent or hold a validly parsed value; the codec never
/// leaves a layer half-set.
///
/// Decoding a bracketed token and re-encoding it reproduces every recognized layer
/// exactly; segments with unrecognized keys are dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedWord {
    #[serde(rename = "turkish")]
    name: String,
    #[serde(rename = "morphologicalAnalysis", skip_serializing_if = "Option::is_none")]
    parse: Option<MorphologicalParse>,
    #[serde(rename = "metaMorphemes", skip_serializing_if = "Option::is_none")]
    metamorphic_parse: Option<MetamorphicParse>,
    #[serde(rename = "semantics", skip_serializing_if = "Option::is_none")]
    semantic: Option<String>,
    #[serde(rename = "namedEntity", skip_serializing_if = "Option::is_none")]
    named_entity_type: Option<NamedEntityType>,
    #[serde(rename = "propbank", skip_serializing_if = "Option::is_none")]
    argument: Option<Argument>,
    #[serde(rename = "framenet", skip_serializing_if = "Option::is_none")]
    frame_element: Option<FrameElement>,
    #[serde(rename = "universalDependency", skip_serializing_if = "Option::is_none")]
    universal_dependency: Option<UniversalDependencyRelation>,
    #[serde(rename = "shallowParse", skip_serializing_if = "Option::is_none")]
    shallow_parse: Option<String>,
    #[serde(rename = "slot", skip_serializing_if = "Option::is_none")]
    slot: Option<Slot>,
    #[serde(rename = "polarity", skip_serializing_if = "Option::is_none")]
    polarity: Option<PolarityType>,
}

impl AnnotatedWord {
    /// A bare word: surface form only, all layers absent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parse: None,
            metamorphic_parse: None,
            semantic: None,
            named_entity_type: None,
            argument: None,
            frame_element: None,
            universal_dependency: None,
            shallow_parse: None,
            slot: None,
            polarity: None,
        }
    }

    /// A word with a named-entity layer already assigned.
    pub fn with_named_entity(name: impl Into<String>, entity_type: NamedEntityType) -> Self {
        let mut word = Self::new(name);
        word.named_entity_type = Some(entity_type);
        word
    }

    /// A word with a morphological analysis layer already assigned.
    pub fn with_parse(name: impl Into<String>, parse: MorphologicalParse) -> Self {
        let mut word = Self::new(name);
        word.parse = Some(parse);
        word
    }

    /// Decodes a bracketed annotation token into a word. Each `{key=value}` segment sets
    /// one layer; a segment without `=` (and the `turkish` key) sets the surface form.
    /// Unrecognized keys are discarded; a malformed value for a recognized key aborts
    /// the decode.
    pub fn from_token(token: &str) -> AnnotationResult<Self> {
        let mut word = Self::new("");
        let mut matched = false;
        for segment in Layer::segments(token) {
            matched = true;
            if segment.is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((key, value)) => {
                    if let Some(layer) = Layer::from_segment(key, value)? {
                        word.apply(layer);
                    }
                }
                None => word.name = segment.to_string(),
            }
        }
        if !matched {
            // an unbracketed token is a bare surface form
            word.name = token.to_string();
        }
        Ok(word)
    }

    fn apply(&mut self, layer: Layer) {
        match layer {
            Layer::Surface(name) => self.name = name,
            Layer::MorphologicalAnalysis(parse) => self.parse = Some(parse),
            Layer::MetaMorphemes(parse) => self.metamorphic_parse = Some(parse),
            Layer::Semantics(sense) => self.semantic = Some(sense),
            Layer::NamedEntity(entity_type) => self.named_entity_type = Some(entity_type),
            Layer::PropBank(argument) => self.argument = Some(argument),
            Layer::FrameNet(frame_element) => self.frame_element = Some(frame_element),
            Layer::ShallowParse(tag) => self.shallow_parse = Some(tag),
            Layer::UniversalDependency(relation) => self.universal_dependency = Some(relation),
            Layer::Slot(slot) => self.slot = Some(slot),
            Layer::Polarity(polarity) => self.polarity = Some(polarity),
        }
    }

    /// The surface form.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The morphological analysis layer.
    pub fn parse(&self) -> Option<&MorphologicalParse> {
        self.parse.as_ref()
    }

    /// Sets or clears the morphological analysis layer from its string form.
    pub fn set_parse(&mut self, parse: Option<&str>) {
        self.parse = parse.map(MorphologicalParse::new);
    }

    /// The metamorphic parse layer.
    pub fn metamorphic_parse(&self) -> Option<&MetamorphicParse> {
        self.metamorphic_parse.as_ref()
    }

    /// Sets or clears the metamorphic parse layer from its string form.
    pub fn set_metamorphic_parse(&mut self, parse: Option<&str>) {
        self.metamorphic_parse = parse.map(MetamorphicParse::new);
    }

    /// The sense id layer.
    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }

    pub fn set_semantic(&mut self, semantic: Option<&str>) {
        self.semantic = semantic.map(str::to_string);
    }

    /// The named-entity layer.
    pub fn named_entity_type(&self) -> Option<NamedEntityType> {
        self.named_entity_type
    }

    /// Sets or clears the named-entity layer from a textual tag.
    pub fn set_named_entity_type(&mut self, entity_type: Option<&str>) {
        self.named_entity_type = entity_type.map(NamedEntityType::parse);
    }

    /// The semantic-role layer.
    pub fn argument(&self) -> Option<&Argument> {
        self.argument.as_ref()
    }

    /// Sets or clears the semantic-role layer from its string form.
    pub fn set_argument(&mut self, argument: Option<&str>) {
        self.argument = argument.map(Argument::new);
    }

    /// The frame-element layer.
    pub fn frame_element(&self) -> Option<&FrameElement> {
        self.frame_element.as_ref()
    }

    /// Sets or clears the frame-element layer from its string form.
    pub fn set_frame_element(&mut self, frame_element: Option<&str>) -> AnnotationResult<()> {
        self.frame_element = match frame_element {
            Some(value) => Some(FrameElement::from_layer_value(value)?),
            None => None,
        };
        Ok(())
    }

    /// The dependency layer.
    pub fn universal_dependency(&self) -> Option<&UniversalDependencyRelation> {
        self.universal_dependency.as_ref()
    }

    /// Sets the dependency layer; a negative target clears the layer (ROOT).
    pub fn set_universal_dependency(&mut self, to: isize, dependency_type: &str) {
        if to < 0 {
            self.universal_dependency = None;
        } else {
            self.universal_dependency = Some(UniversalDependencyRelation::new(to, dependency_type));
        }
    }

    /// The shallow-parse (chunk) layer.
    pub fn shallow_parse(&self) -> Option<&str> {
        self.shallow_parse.as_deref()
    }

    pub fn set_shallow_parse(&mut self, tag: Option<&str>) {
        self.shallow_parse = tag.map(str::to_string);
    }

    /// The slot-filling layer.
    pub fn slot(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    pub fn set_slot(&mut self, slot: Option<&str>) {
        self.slot = slot.map(Slot::new);
    }

    /// The polarity layer.
    pub fn polarity(&self) -> Option<PolarityType> {
        self.polarity
    }

    /// Sets or clears the polarity layer from a textual tag.
    pub fn set_polarity(&mut self, polarity: Option<&str>) {
        self.polarity = polarity.map(PolarityType::parse);
    }

    /// The textual value of an addressed layer, `None` when the layer is absent. The
    /// returned forms are the same the codec emits.
    pub fn layer_info(&self, layer: ViewLayer) -> Option<String> {
        match layer {
            ViewLayer::Surface => Some(self.name.clone()),
            ViewLayer::InflectionalGroup => self.parse.as_ref().map(|p| p.to_string()),
            ViewLayer::MetaMorpheme => self.metamorphic_parse.as_ref().map(|p| p.to_string()),
            ViewLayer::Semantics => self.semantic.clone(),
            ViewLayer::NamedEntity => self.named_entity_type.map(|t| t.to_string()),
            ViewLayer::PropBank => self.argument.as_ref().map(|a| a.to_string()),
            ViewLayer::FrameNet => self.frame_element.as_ref().map(|e| e.to_string()),
            ViewLayer::ShallowParse => self.shallow_parse.clone(),
            ViewLayer::Dependency => self
                .universal_dependency
                .as_ref()
                .map(|r| format!("{}${}", r.to(), r)),
            ViewLayer::Slot => self.slot.as_ref().map(|s| s.to_string()),
            ViewLayer::Polarity => self.polarity.map(|p| p.to_string()),
        }
    }

    /// Assigns the gazetteer's name as the named-entity tag when the lowercased surface
    /// form, or its prefix before an apostrophe, is listed in the gazetteer and the
    /// morphological parse carries the proper-noun tag.
    pub fn check_gazetteer<G: Gazetteer>(&mut self, gazetteer: &G) {
        let lowercased = lowercase(&self.name);
        let proper_noun = self
            .parse
            .as_ref()
            .map_or(false, |p| p.contains_tag(MorphologicalTag::ProperNoun));
        if gazetteer.contains(&lowercased) && proper_noun {
            self.set_named_entity_type(Some(gazetteer.name()));
        }
        if let Some(apostrophe) = lowercased.find('\'') {
            if gazetteer.contains(&lowercased[..apostrophe]) && proper_noun {
                self.set_named_entity_type(Some(gazetteer.name()));
            }
        }
    }
}

impl fmt::Display for AnnotatedWord {
    /// Encodes the word as a bracketed annotation token: the surface form first, then
    /// every present layer in canonical order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{turkish={}}}", self.name)?;
        if let Some(parse) = &self.parse {
            write!(f, "{{morphologicalAnalysis={}}}", parse)?;
        }
        if let Some(parse) = &self.metamorphic_parse {
            write!(f, "{{metaMorphemes={}}}", parse)?;
        }
        if let Some(semantic) = &self.semantic {
            write!(f, "{{semantics={}}}", semantic)?;
        }
        if let Some(entity_type) = &self.named_entity_type {
            write!(f, "{{namedEntity={}}}", entity_type)?;
        }
        if let Some(argument) = &self.argument {
            write!(f, "{{propbank={}}}", argument)?;
        }
        if let Some(frame_element) = &self.frame_element {
            write!(f, "{{framenet={}}}", frame_element)?;
        }
        if let Some(tag) = &self.shallow_parse {
            write!(f, "{{shallowParse={}}}", tag)?;
        }
        if let Some(relation) = &self.universal_dependency {
            write!(f, "{{universalDependency={}${}}}", relation.to(), relation)?;
        }
        if let Some(slot) = &self.slot {
            write!(f, "{{slot={}}}", slot)?;
        }
        if let Some(polarity) = &self.polarity {
            write!(f, "{{polarity={}}}", polarity)?;
        }
        Ok(())
    }
}

#[sealed]
impl TypeInfo for AnnotatedWord {
    fn typeinfo() -> Type {
        Type::AnnotatedWord
    }
}

impl ToJson for AnnotatedWord {}

/// Locale-aware lowercasing for the dotted/dotless i distinction; all other characters
/// take their unicode lowercase.
pub(crate) fn lowercase(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => result.push('ı'),
            'İ' => result.push('i'),
            _ => result.extend(c.to_lowercase()),
        }
    }
    result
}
