use crate::internal::sys::*;

/// Generic representation of a parsed JSON document. Object members keep
/// their insertion order; numeric literals are kept verbatim so the
/// consumer that knows the destination type decides their representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(String),
    Text(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Looks up an object member by key. Returns `None` for non-objects.
    pub fn member(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

/// Reconstruction strategy for a JSON array landing in a concrete
/// container type. Every supported container declares exactly one kind;
/// anything else goes through `EnumerableFallback` with `MutableList`
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    FixedArray,
    MutableList,
    GrowableCollection,
    ObservableList,
    ImmutableView,
    LinkedSequence,
    UniqueSet,
    FifoQueue,
    LifoStack,
    EnumerableFallback,
}

impl ContainerKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::FixedArray => "fixed-size array",
            ContainerKind::MutableList => "list",
            ContainerKind::GrowableCollection => "collection",
            ContainerKind::ObservableList => "observable collection",
            ContainerKind::ImmutableView => "read-only view",
            ContainerKind::LinkedSequence => "linked list",
            ContainerKind::UniqueSet => "set",
            ContainerKind::FifoQueue => "queue",
            ContainerKind::LifoStack => "stack",
            ContainerKind::EnumerableFallback => "sequence",
        }
    }

    /// Wire arrays for a stack list elements in pop order (top first), so
    /// the staged buffer is reversed before the container is rebuilt
    /// bottom-up. A drained stack then yields elements in wire order.
    pub fn reverses_staging(&self) -> bool {
        matches!(self, ContainerKind::LifoStack)
    }

    /// Kinds whose final container is constructed once from a finished
    /// staging buffer instead of element-wise inserts.
    pub fn builds_from_staging(&self) -> bool {
        matches!(
            self,
            ContainerKind::FixedArray | ContainerKind::ImmutableView | ContainerKind::LifoStack
        )
    }
}

/// Failure classes of the codec. `Syntax` carries a source position;
/// the remaining kinds describe a mismatch between the parsed tree and
/// the destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed JSON text.
    Syntax,
    /// A token cannot be parsed as the required primitive.
    Format,
    /// The JSON shape (object/array/scalar) does not match the target.
    Shape,
    /// The target type cannot be produced: unknown member, missing
    /// field, arity mismatch.
    Unsupported,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub context: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Error {
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            context: None,
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Format,
            message: message.into(),
            context: None,
            line: None,
            column: None,
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Shape,
            message: message.into(),
            context: None,
            line: None,
            column: None,
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unsupported,
            message: message.into(),
            context: None,
            line: None,
            column: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());

        self
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self.kind {
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Format => "Format",
            ErrorKind::Shape => "Shape",
            ErrorKind::Unsupported => "Type",
        };

        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(
                    f,
                    "{} error at line {}, column {}: {}",
                    label, line, column, self.message
                )?;

                if let Some(context) = &self.context {
                    write!(f, "\nContext: {}", context)?;
                }

                Ok(())
            }
            _ => {
                write!(f, "{} error: {}", label, self.message)?;

                Ok(())
            }
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

pub trait Serialize {
    fn serialize(&self) -> Result<Value>;
}

pub trait Deserialize: Sized {
    fn deserialize(value: Value) -> Result<Self>;
}

/// A map key travels as a JSON member name, so a key type must round-trip
/// through its plain text form. Non-primitive key types cannot implement
/// this, which keeps unsupported keys a compile-time failure.
pub trait MapKey: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Result<Self>;
}
