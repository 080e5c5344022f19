//! Strict parser for channel-ordered Semantic Version numbers.
//!
//! The numeric core is strict: exactly three numbers, each of them either `0`
//! or a number without a leading zero. Everything after the core is permissive:
//! pre-release labels and build metadata are runs of alpha-numeric identifiers
//! and are handed to the [`VersionBuilder`] as a single slice each.
//!
//! ```text
//! version     := core ( "-" pre_release )? ( "+" build )?
//! core        := number "." number "." number
//! number      := "0" | [1-9][0-9]*
//! pre_release := ident ( ( "." | "~" ) ident )*
//! build       := ident ( "." ident )*
//! ident       := [0-9A-Za-z-]+
//! ```
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{fmt::Display, ops::Range};

/// Parse a string slice into a Version.
///
/// The input must be a complete version, there is no leading `v` and no surrounding whitespace.
/// Which parts of the version are kept is up to the [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// use channel_semver_parser::VersionBuilder;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Core([u64; 3]);
///
/// impl VersionBuilder<'_> for Core {
///     type Out = [u64; 3];
///
///     fn new() -> Self {
///         Core::default()
///     }
///
///     fn set_major(&mut self, major: u64) {
///         self.0[0] = major;
///     }
///
///     fn set_minor(&mut self, minor: u64) {
///         self.0[1] = minor;
///     }
///
///     fn set_patch(&mut self, patch: u64) {
///         self.0[2] = patch;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(channel_semver_parser::parse::<Core>("1.2.3-rc.1+build"), Ok([1, 2, 3]));
///
/// // the core must have exactly three numbers
/// assert!(channel_semver_parser::parse::<Core>("1.2").is_err());
/// assert!(channel_semver_parser::parse::<Core>("1.2.3.4").is_err());
///
/// // and no leading zeroes
/// assert!(channel_semver_parser::parse::<Core>("1.02.3").is_err());
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_version::<_, V>(input, lex(input)).map_err(|ErrorSpan { error, span }| Error {
        input,
        span,
        error,
    })
}

/// Check that the input is a valid version without building anything.
///
/// ## Examples
///
/// ```rust
/// assert!(channel_semver_parser::validate("1.0.0-alpha~2").is_ok());
/// assert!(channel_semver_parser::validate("1.0").is_err());
/// ```
pub fn validate(input: &str) -> Result<(), Error<'_>> {
    parse::<()>(input)
}

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the components of a version,
/// but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
///
/// ## Example
///
/// ```rust
/// # use channel_semver_parser::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn set_pre_release(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     channel_semver_parser::parse::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("1.2.3-pre"));
/// assert!(!is_pre_release("1.2.3"));
/// assert!(!is_pre_release("1.2.3+build"));
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    ///
    /// All three numeric components are always set before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Set the pre-release label.
    ///
    /// The label is everything between the `-` following the patch number
    /// and the `+` that starts the build metadata (or the end of input),
    /// e.g. `rc.1` for `1.2.3-rc.1+build`.
    ///
    /// This component is optional and is called at most once.
    #[allow(unused)]
    fn set_pre_release(&mut self, pre_release: &'input str) {}

    /// Set the build metadata.
    ///
    /// The metadata is everything after the `+`, e.g. `build.42` for `1.2.3+build.42`.
    ///
    /// This component is optional and is called at most once.
    #[allow(unused)]
    fn set_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

impl VersionBuilder<'_> for () {
    type Out = ();

    fn new() -> Self {}

    fn build(self) -> Self::Out {}
}

/// Possible errors that happen during parsing
/// and the location of the token where the error occurred.
///
/// # Example
///
/// ```rust
/// let error = channel_semver_parser::validate("1.2.3+").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse the build identifier: No input");
///
/// let error = channel_semver_parser::validate("1.2.3!").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected `!`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorType,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("1.2.3+").unwrap_err();
    /// assert_eq!(error.input(), "1.2.3+");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("1.2.3+").unwrap_err();
    /// assert_eq!(error.error_span(), 5..6);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use channel_semver_parser::{validate, ErrorKind};
    ///
    /// assert_eq!(validate("").unwrap_err().error_kind(), ErrorKind::MissingMajorNumber);
    /// assert_eq!(validate("1").unwrap_err().error_kind(), ErrorKind::MissingMinorNumber);
    /// assert_eq!(validate("1.2").unwrap_err().error_kind(), ErrorKind::MissingPatchNumber);
    /// assert_eq!(validate("1.2.3-").unwrap_err().error_kind(), ErrorKind::MissingPreRelease);
    /// assert_eq!(validate("1.2.3+").unwrap_err().error_kind(), ErrorKind::MissingBuild);
    /// assert_eq!(validate("a.2.3").unwrap_err().error_kind(), ErrorKind::MajorNotANumber);
    /// assert_eq!(validate("1.02.3").unwrap_err().error_kind(), ErrorKind::MinorLeadingZero);
    /// assert_eq!(
    ///     validate("1.2.99999999999999999999").unwrap_err().error_kind(),
    ///     ErrorKind::PatchOverflow
    /// );
    /// assert_eq!(validate("1.2.3.4").unwrap_err().error_kind(), ErrorKind::UnexpectedInput);
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        match self.error {
            ErrorType::Missing(segment) => match segment {
                Segment::Part(Part::Major) => ErrorKind::MissingMajorNumber,
                Segment::Part(Part::Minor) => ErrorKind::MissingMinorNumber,
                Segment::Part(Part::Patch) => ErrorKind::MissingPatchNumber,
                Segment::PreRelease => ErrorKind::MissingPreRelease,
                Segment::Build => ErrorKind::MissingBuild,
            },
            ErrorType::NotANumber(part) => match part {
                Part::Major => ErrorKind::MajorNotANumber,
                Part::Minor => ErrorKind::MinorNotANumber,
                Part::Patch => ErrorKind::PatchNotANumber,
            },
            ErrorType::LeadingZero(part) => match part {
                Part::Major => ErrorKind::MajorLeadingZero,
                Part::Minor => ErrorKind::MinorLeadingZero,
                Part::Patch => ErrorKind::PatchLeadingZero,
            },
            ErrorType::Overflow(part) => match part {
                Part::Major => ErrorKind::MajorOverflow,
                Part::Minor => ErrorKind::MinorOverflow,
                Part::Patch => ErrorKind::PatchOverflow,
            },
            ErrorType::Unexpected => ErrorKind::UnexpectedInput,
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("1.2.3+").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "+");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("1.").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("Could not parse the minor identifier: No input"));
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("1.2.3?").unwrap_err();
    /// assert_eq!(format!("{:!^42}", error), String::from("!!!!!!!!!!!!!!Unexpected `?`!!!!!!!!!!!!!!"));
    /// ```
    pub fn error_line(&self) -> String {
        match &self.error {
            ErrorType::Missing(segment) => {
                format!("Could not parse the {} identifier: No input", segment)
            }
            ErrorType::NotANumber(part) => format!(
                "Could not parse the {} identifier: `{}` is not a number",
                part,
                self.erroneous_input()
            ),
            ErrorType::LeadingZero(part) => format!(
                "Could not parse the {} identifier: `{}` has a leading zero",
                part,
                self.erroneous_input()
            ),
            ErrorType::Overflow(part) => format!(
                "Could not parse the {} identifier: `{}` is too large",
                part,
                self.erroneous_input()
            ),
            ErrorType::Unexpected => format!("Unexpected `{}`", self.erroneous_input()),
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = channel_semver_parser::validate("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^^^");
    ///
    /// let error = channel_semver_parser::validate("1.2.3 bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorType,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.borrowed().error_kind()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// Possible errors that can happen.
/// These don't include an information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Expected to parse the major number part, but nothing was found
    MissingMajorNumber,
    /// Expected to parse the minor number part, but nothing was found
    MissingMinorNumber,
    /// Expected to parse the patch number part, but nothing was found
    MissingPatchNumber,
    /// Expected to parse the pre-release identifier part, but nothing was found
    MissingPreRelease,
    /// Expected to parse the build identifier part, but nothing was found
    MissingBuild,
    /// Trying to parse the major number part, but the input was not a number
    MajorNotANumber,
    /// Trying to parse the minor number part, but the input was not a number
    MinorNotANumber,
    /// Trying to parse the patch number part, but the input was not a number
    PatchNotANumber,
    /// The major number part has a leading zero
    MajorLeadingZero,
    /// The minor number part has a leading zero
    MinorLeadingZero,
    /// The patch number part has a leading zero
    PatchLeadingZero,
    /// The major number part does not fit into an u64
    MajorOverflow,
    /// The minor number part does not fit into an u64
    MinorOverflow,
    /// The patch number part does not fit into an u64
    PatchOverflow,
    /// Found an unexpected input
    UnexpectedInput,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorType,
    span: Span,
}

impl ErrorSpan {
    fn new(error: ErrorType, span: Span) -> Self {
        Self { error, span }
    }

    fn missing(segment: Segment, span: Span) -> Self {
        Self::new(ErrorType::Missing(segment), span)
    }

    fn missing_part(part: Part, span: Span) -> Self {
        Self::missing(Segment::Part(part), span)
    }

    fn unexpected(span: Span) -> Self {
        Self::new(ErrorType::Unexpected, span)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ErrorType {
    Missing(Segment),
    NotANumber(Part),
    LeadingZero(Part),
    Overflow(Part),
    Unexpected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Part {
    Major,
    Minor,
    Patch,
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Segment {
    Part(Part),
    PreRelease,
    Build,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Part(part) => part.fmt(f),
            Segment::PreRelease => f.pad("pre-release"),
            Segment::Build => f.pad("build"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum State {
    Part(Part),
    PreRelease,
    Build,
}

fn parse_version<'input, I, V>(input: &'input str, tokens: I) -> Result<V::Out, ErrorSpan>
where
    I: IntoIterator<Item = TokenSpan>,
    V: VersionBuilder<'input>,
{
    let mut tokens = tokens.into_iter();
    let mut version = V::new();
    let mut state = State::Part(Part::Major);
    // the separator that opened the current state
    let mut opening = Span::new(0, 0);

    loop {
        match state {
            State::Part(part) => {
                let token = tokens
                    .next()
                    .ok_or_else(|| ErrorSpan::missing_part(part, opening))?;
                let number = parse_number(token, part, input)?;
                match part {
                    Part::Major => version.set_major(number),
                    Part::Minor => version.set_minor(number),
                    Part::Patch => version.set_patch(number),
                }
                state = match (part, tokens.next()) {
                    (Part::Patch, None) => return finish(version),
                    // the input ended early, there is no token to blame
                    (Part::Major, None) => {
                        return Err(ErrorSpan::missing_part(Part::Minor, Span::at_end(input)))
                    }
                    (Part::Minor, None) => {
                        return Err(ErrorSpan::missing_part(Part::Patch, Span::at_end(input)))
                    }
                    (Part::Major, Some(TokenSpan { token: Token::Dot, span })) => {
                        opening = span;
                        State::Part(Part::Minor)
                    }
                    (Part::Minor, Some(TokenSpan { token: Token::Dot, span })) => {
                        opening = span;
                        State::Part(Part::Patch)
                    }
                    (Part::Patch, Some(TokenSpan { token: Token::Hyphen, span })) => {
                        opening = span;
                        State::PreRelease
                    }
                    (Part::Patch, Some(TokenSpan { token: Token::Plus, span })) => {
                        opening = span;
                        State::Build
                    }
                    (_, Some(token)) => return Err(ErrorSpan::unexpected(token.span)),
                };
            }
            State::PreRelease => {
                let (end, next) = identifiers(&mut tokens, opening, Segment::PreRelease)?;
                version.set_pre_release(&input[opening.end..end]);
                state = match next {
                    None => return finish(version),
                    Some(TokenSpan {
                        token: Token::Plus,
                        span,
                    }) => {
                        opening = span;
                        State::Build
                    }
                    Some(token) => return Err(ErrorSpan::unexpected(token.span)),
                };
            }
            State::Build => {
                // inline last state as we never change it
                let (end, next) = identifiers(&mut tokens, opening, Segment::Build)?;
                version.set_build(&input[opening.end..end]);
                return match next {
                    None => finish(version),
                    Some(token) => Err(ErrorSpan::unexpected(token.span)),
                };
            }
        }
    }
}

/// Consumes `ident (separator ident)*` and returns where the run ended
/// together with the token that stopped it.
fn identifiers<I>(
    tokens: &mut I,
    opening: Span,
    segment: Segment,
) -> Result<(usize, Option<TokenSpan>), ErrorSpan>
where
    I: Iterator<Item = TokenSpan>,
{
    let mut end = opening.end;
    // a separator that still waits for its identifier
    let mut pending = Some(opening);

    loop {
        let next = tokens.next();
        match next {
            Some(TokenSpan { token, span }) if token.is_identifier() => {
                end = span.end;
                pending = None;
            }
            Some(TokenSpan { token, span })
                if pending.is_none() && token.is_separator_in(segment) =>
            {
                pending = Some(span);
            }
            _ => {
                return match (pending, next) {
                    (None, next) => Ok((end, next)),
                    (Some(separator), None) => Err(ErrorSpan::missing(segment, separator)),
                    (Some(_), Some(token)) => Err(ErrorSpan::unexpected(token.span)),
                };
            }
        }
    }
}

fn parse_number(token: TokenSpan, part: Part, input: &str) -> Result<u64, ErrorSpan> {
    parse_number_inner(token.token, part, token.span.at(input))
        .map_err(|e| ErrorSpan::new(e, token.span))
}

fn parse_number_inner(token: Token, part: Part, number: &str) -> Result<u64, ErrorType> {
    match token {
        Token::Numeric => {}
        Token::Whitespace | Token::UnexpectedChar => return Err(ErrorType::Unexpected),
        _ => return Err(ErrorType::NotANumber(part)),
    }
    if number.len() > 1 && number.starts_with('0') {
        return Err(ErrorType::LeadingZero(part));
    }
    number.parse::<u64>().map_err(|_| ErrorType::Overflow(part))
}

#[inline]
fn finish<'input, V>(value: V) -> Result<V::Out, ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    Ok(value.build())
}

fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

#[derive(Debug)]
struct Lexer<'input> {
    chars: std::str::CharIndices<'input>,
    end: usize,
    peeked: Option<(usize, char)>,
}

impl<'input> Lexer<'input> {
    fn new(input: &'input str) -> Lexer<'input> {
        let mut chars = input.char_indices();
        let peeked = chars.next();
        Lexer {
            chars,
            end: input.len(),
            peeked,
        }
    }

    /// Skips over all chars that are accepted and returns the end of the skipped run.
    fn skip_while(&mut self, accept: impl Fn(char) -> bool) -> usize {
        match self.chars.find(|&(_, c)| !accept(c)) {
            Some((j, c)) => {
                self.peeked = Some((j, c));
                j
            }
            None => self.end,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Token {
    /// Any ascii whitespace
    Whitespace,
    /// numeric component
    Numeric,
    /// alphanumeric component
    Alpha,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `-`
    Hyphen,
    /// `~`
    Tilde,
    /// Error cases
    UnexpectedChar,
}

impl Token {
    fn is_identifier(self) -> bool {
        matches!(self, Token::Numeric | Token::Alpha | Token::Hyphen)
    }

    fn is_separator_in(self, segment: Segment) -> bool {
        match segment {
            Segment::PreRelease => matches!(self, Token::Dot | Token::Tilde),
            Segment::Build => self == Token::Dot,
            Segment::Part(_) => false,
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = self.peeked.take()?;

        let (end, token) = match c {
            ' ' | '\t' | '\n' | '\x0C' | '\r' => {
                (self.skip_while(|c| c.is_ascii_whitespace()), Token::Whitespace)
            }
            '0'..='9' => {
                let end = self.skip_while(|c| c.is_ascii_digit());
                match self.peeked {
                    // digits followed by letters form an alphanumeric identifier
                    Some((_, c)) if c.is_ascii_alphabetic() => {
                        self.peeked = None;
                        (self.skip_while(|c| c.is_ascii_alphanumeric()), Token::Alpha)
                    }
                    _ => (end, Token::Numeric),
                }
            }
            'A'..='Z' | 'a'..='z' => (
                self.skip_while(|c| c.is_ascii_alphanumeric()),
                Token::Alpha,
            ),
            '.' => (start + 1, Token::Dot),
            '-' => (start + 1, Token::Hyphen),
            '+' => (start + 1, Token::Plus),
            '~' => (start + 1, Token::Tilde),
            _ => (start + c.len_utf8(), Token::UnexpectedChar),
        };

        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }
        Some(TokenSpan::new(token, start, end))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct TokenSpan {
    token: Token,
    span: Span,
}

impl TokenSpan {
    fn new(token: Token, start: usize, end: usize) -> Self {
        Self {
            token,
            span: Span::new(start, end),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn at_end(input: &str) -> Self {
        Self::new(input.len(), input.len())
    }

    fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
