// Quantity expression parser, e.g. `78.4 kg` or `512KB`.
//
// The grammar only splits the number from the unit symbol; looking the symbol up
// is left to the unit family so that one grammar serves every family.
peg::parser! {
    pub(crate) grammar quantity_parser() for str {
        /// Whitespace.
        rule __() = [' ' | '\n' | '\t']*

        rule sign() = ['-' | '+']
        rule digits() = [c if c.is_ascii_digit()]+

        pub rule decimal() -> f64
            = num:$(sign()?digits()("." digits())?(['e' | 'E']sign()?digits())?)
            {? num.parse::<f64>().or(Err("Invalid decimal number")) }

        /// Unit symbols are plain ASCII letters.
        pub rule symbol() -> &'input str
            = sym:$([c if c.is_ascii_alphabetic()]+)
            { sym }

        pub rule quantity() -> (f64, &'input str)
            = __ n:decimal() __ sym:symbol() __
            { (n, sym) }
    }
}
