//! Plain-mapping classification.
//!
//! A value is classified by how it presents itself to serde: string-keyed
//! maps are plain mappings, while structs and other named types are opaque
//! instances even though they also carry named fields. Only the outermost
//! layer is inspected; children are never serialized.

use std::fmt;

use serde::{
    Serialize, Serializer,
    ser::{
        SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
        SerializeTupleStruct, SerializeTupleVariant,
    },
};
use serde_json::Value;
use thiserror::Error;

/// The structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A map with string keys.
    Mapping,
    /// An ordered sequence.
    Sequence,
    /// Strings, numbers, booleans, unit and absent values.
    Scalar,
    /// Structs, enum variants with data, and maps keyed by anything but strings.
    Opaque,
}

impl Shape {
    /// Shape of an already parsed JSON value.
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Shape::Mapping,
            Value::Array(_) => Shape::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }
}

/// Classify `value`. Never fails: values that cannot be serialized are `Opaque`.
pub fn shape_of<T: Serialize + ?Sized>(value: &T) -> Shape {
    value.serialize(ShapeProbe).unwrap_or(Shape::Opaque)
}

/// Whether `value` is a plain string-keyed mapping.
pub fn is_plain_object<T: Serialize + ?Sized>(value: &T) -> bool {
    shape_of(value) == Shape::Mapping
}

#[derive(Debug, Error)]
#[error("{0}")]
pub(crate) struct ProbeError(String);

impl serde::ser::Error for ProbeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ProbeError(msg.to_string())
    }
}

struct ShapeProbe;

macro_rules! scalar {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, _: $ty) -> Result<Shape, ProbeError> {
                Ok(Shape::Scalar)
            }
        )*
    };
}

impl Serializer for ShapeProbe {
    type Ok = Shape;
    type Error = ProbeError;
    type SerializeSeq = Compound;
    type SerializeTuple = Compound;
    type SerializeTupleStruct = Compound;
    type SerializeTupleVariant = Compound;
    type SerializeMap = MapProbe;
    type SerializeStruct = Compound;
    type SerializeStructVariant = Compound;

    scalar! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<Shape, ProbeError> {
        Ok(Shape::Scalar)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Shape, ProbeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Shape, ProbeError> {
        Ok(Shape::Scalar)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Shape, ProbeError> {
        Ok(Shape::Opaque)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Shape, ProbeError> {
        Ok(Shape::Scalar)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _value: &T,
    ) -> Result<Shape, ProbeError> {
        Ok(Shape::Opaque)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Shape, ProbeError> {
        Ok(Shape::Opaque)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Sequence))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Opaque))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Opaque))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapProbe, ProbeError> {
        Ok(MapProbe { string_keys: true })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Opaque))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Compound, ProbeError> {
        Ok(Compound(Shape::Opaque))
    }
}

/// Swallows elements of a compound whose shape is already decided.
struct Compound(Shape);

impl SerializeSeq for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

impl SerializeTuple for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

impl SerializeTupleStruct for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

impl SerializeTupleVariant for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

impl SerializeStruct for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

impl SerializeStructVariant for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(self.0)
    }
}

/// A map is plain only while every key it yields serializes to a JSON string.
struct MapProbe {
    string_keys: bool,
}

impl SerializeMap for MapProbe {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), ProbeError> {
        if self.string_keys {
            self.string_keys = matches!(serde_json::to_value(key), Ok(Value::String(_)));
        }
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ProbeError> {
        Ok(if self.string_keys {
            Shape::Mapping
        } else {
            Shape::Opaque
        })
    }
}
