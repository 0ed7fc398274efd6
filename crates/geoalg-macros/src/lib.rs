extern crate proc_macro;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Error, Fields, Ident, Item, ItemStruct, LitInt, Token};

struct AlgebraInput {
    items: Vec<Item>,
}

impl Parse for AlgebraInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(AlgebraInput { items })
    }
}

/// One entry of the metric![] pseudo-macro, e.g. `0`, `1` or `-1`
struct MetricEntry(isize);

impl Parse for MetricEntry {
    fn parse(input: ParseStream) -> Result<Self> {
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let lit: LitInt = input.parse()?;
        let value = lit.base10_parse::<isize>()?;
        Ok(MetricEntry(if negative { -value } else { value }))
    }
}

/// A multivector struct field, resolved against the basis
struct Coefficient {
    field: Ident,
    /// Basis vector indices in ascending order; empty for the scalar
    blade: Vec<usize>,
    /// +1 or -1 depending on whether the spelled-out order is an even
    /// or odd permutation of `blade`
    sign: isize,
}

impl Coefficient {
    fn grade(&self) -> usize {
        self.blade.len()
    }
}

struct Multivector {
    item: ItemStruct,
    coefficients: Vec<Coefficient>,
}

/// One term `coef * a_i * b_j` of a symbolic product
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Term {
    coef: isize,
    lhs: usize,
    rhs: usize,
}

fn bubble_sort_count_swaps(l: &mut [usize]) -> usize {
    let mut swaps: usize = 0;
    for i in (0..l.len()).rev() {
        for j in 0..i {
            if l[j] > l[j + 1] {
                (l[j], l[j + 1]) = (l[j + 1], l[j]);
                swaps += 1
            }
        }
    }
    swaps
}

fn parity_sign(swaps: usize) -> isize {
    if swaps % 2 == 0 {
        1
    } else {
        -1
    }
}

/// Multiply two blades given as ascending lists of basis vector indices.
/// Returns the coefficient and the ascending blade of the result.
fn multiply_blades(metric: &[isize], a: &[usize], b: &[usize]) -> (isize, Vec<usize>) {
    let mut product: Vec<usize> = a.iter().chain(b.iter()).cloned().collect();
    let mut coef = parity_sign(bubble_sort_count_swaps(&mut product));

    // Contract repeated basis vectors using the metric
    let mut result = vec![];
    let mut prev = None;
    for e in product.into_iter() {
        if Some(e) == prev {
            coef *= metric[e];
            prev = None;
        } else {
            if let Some(p) = prev {
                result.push(p);
            }
            prev = Some(e);
        }
    }
    if let Some(p) = prev {
        result.push(p);
    }
    (coef, result)
}

/// Split basis vector names into their common prefix and one distinguishing character each
fn basis_characters(basis: &[Ident]) -> Result<(String, Vec<char>)> {
    let Some(first) = basis.first() else {
        return Err(Error::new(Span::call_site(), "basis![] must not be empty"));
    };
    let mut prefix: Vec<char> = first.to_string().chars().collect();
    prefix.pop();
    let prefix: String = prefix.into_iter().collect();

    let mut characters = Vec::with_capacity(basis.len());
    for ident in basis {
        let name = ident.to_string();
        let rest: Vec<char> = match name.strip_prefix(&prefix) {
            Some(rest) => rest.chars().collect(),
            None => vec![],
        };
        if rest.len() != 1 {
            return Err(Error::new_spanned(
                ident,
                format!("basis vectors must be \"{}\" followed by a single character", prefix),
            ));
        }
        if characters.contains(&rest[0]) {
            return Err(Error::new_spanned(ident, "duplicate basis vector"));
        }
        characters.push(rest[0]);
    }
    Ok((prefix, characters))
}

fn resolve_coefficient(field: &Ident, prefix: &str, characters: &[char]) -> Result<Coefficient> {
    let name = field.to_string();
    let indices: Option<Vec<usize>> = name
        .strip_prefix(prefix)
        .filter(|rest| !rest.is_empty())
        .and_then(|rest| {
            rest.chars()
                .map(|c| characters.iter().position(|&b| b == c))
                .collect()
        });

    let Some(mut blade) = indices else {
        // A field whose name isn't composed of basis vectors is the scalar
        return Ok(Coefficient {
            field: field.clone(),
            blade: vec![],
            sign: 1,
        });
    };

    let sign = parity_sign(bubble_sort_count_swaps(&mut blade));
    if blade.windows(2).any(|w| w[0] == w[1]) {
        return Err(Error::new_spanned(field, "repeated basis vector in field name"));
    }
    Ok(Coefficient {
        field: field.clone(),
        blade,
        sign,
    })
}

fn resolve_multivector(
    item: ItemStruct,
    dimension: usize,
    prefix: &str,
    characters: &[char],
) -> Result<Multivector> {
    let Fields::Named(named) = &item.fields else {
        return Err(Error::new_spanned(&item, "multivector must have named fields"));
    };
    let expected = 1usize << dimension;
    if named.named.len() != expected {
        return Err(Error::new_spanned(
            &item.ident,
            format!("multivector must have one field per basis blade ({})", expected),
        ));
    }

    let coefficients = named
        .named
        .iter()
        .map(|f| {
            let ident = f.ident.as_ref().ok_or_else(|| Error::new_spanned(f, "unnamed field"))?;
            resolve_coefficient(ident, prefix, characters)
        })
        .collect::<Result<Vec<_>>>()?;

    for (i, c) in coefficients.iter().enumerate() {
        if coefficients[..i].iter().any(|other| other.blade == c.blade) {
            return Err(Error::new_spanned(&c.field, "basis blade appears twice"));
        }
        // Reversing the field order must map each blade onto its complement
        let complement = &coefficients[expected - i - 1];
        if c.grade() + complement.grade() != dimension {
            return Err(Error::new_spanned(
                &c.field,
                format!(
                    "field `{}` must be mirrored by a field of grade {}",
                    c.field,
                    dimension - c.grade()
                ),
            ));
        }
    }

    Ok(Multivector { item, coefficients })
}

/// Multiplication table over the struct's own coefficient order.
/// Entry `[i][j]` is `(coef, k)` such that field i times field j equals coef times field k.
fn multiplication_table(metric: &[isize], coefficients: &[Coefficient]) -> Vec<Vec<(isize, usize)>> {
    coefficients
        .iter()
        .map(|ci| {
            coefficients
                .iter()
                .map(|cj| {
                    let (coef, blade) = multiply_blades(metric, &ci.blade, &cj.blade);
                    let k = coefficients
                        .iter()
                        .position(|ck| ck.blade == blade)
                        .expect("struct was validated to contain every blade");
                    (coef * ci.sign * cj.sign * coefficients[k].sign, k)
                })
                .collect()
        })
        .collect()
}

/// Expand a product into one list of terms per output coefficient
fn symbolic_product<F: Fn(usize, usize) -> (isize, usize)>(n: usize, product: F) -> Vec<Vec<Term>> {
    let mut result = vec![vec![]; n];
    for lhs in 0..n {
        for rhs in 0..n {
            let (coef, k) = product(lhs, rhs);
            if coef != 0 {
                result[k].push(Term { coef, lhs, rhs });
            }
        }
    }
    result
}

fn sum_tokens(terms: &[Term], a: &[Ident], b: &[Ident]) -> TokenStream {
    if terms.is_empty() {
        return quote! { T::zero() };
    }
    terms
        .iter()
        .enumerate()
        .map(|(count, term)| {
            let lhs = &a[term.lhs];
            let rhs = &b[term.rhs];
            let op = match (count, term.coef > 0) {
                (0, true) => quote! {},
                (_, true) => quote! { + },
                (_, false) => quote! { - },
            };
            if term.coef.abs() == 1 {
                quote! { #op #lhs * #rhs }
            } else {
                let magnitude = term.coef.abs();
                quote! { #op T::from_integer(#magnitude) * #lhs * #rhs }
            }
        })
        .collect()
}

fn gen_binary_product(
    mv: &Multivector,
    terms: &[Vec<Term>],
    op_trait: TokenStream,
    op_fn: Ident,
) -> TokenStream {
    let name = &mv.item.ident;
    let fields: Vec<&Ident> = mv.coefficients.iter().map(|c| &c.field).collect();
    let a: Vec<Ident> = fields.iter().map(|f| format_ident!("a_{}", f)).collect();
    let b: Vec<Ident> = fields.iter().map(|f| format_ident!("b_{}", f)).collect();
    let exprs: Vec<TokenStream> = terms.iter().map(|t| sum_tokens(t, &a, &b)).collect();

    quote! {
        impl<T: Ring> #op_trait<#name<T>> for #name<T> {
            type Output = #name<T>;

            fn #op_fn(self, r: #name<T>) -> #name<T> {
                let #name { #(#fields: #a),* } = self;
                let #name { #(#fields: #b),* } = r;
                #name { #(#fields: #exprs),* }
            }
        }
    }
}

fn gen_operator_alias(mv: &Multivector, op_trait: TokenStream, op_fn: &str, via: &str) -> TokenStream {
    let name = &mv.item.ident;
    let op_fn = Ident::new(op_fn, Span::call_site());
    let via = Ident::new(via, Span::call_site());
    quote! {
        impl<T: Ring> #op_trait<#name<T>> for #name<T> {
            type Output = #name<T>;

            fn #op_fn(self, r: #name<T>) -> #name<T> {
                self.#via(r)
            }
        }
    }
}

fn gen_sign_operator<F: Fn(usize) -> bool>(
    mv: &Multivector,
    op_trait: TokenStream,
    op_fn: &str,
    negate_grade: F,
) -> TokenStream {
    let name = &mv.item.ident;
    let op_fn = Ident::new(op_fn, Span::call_site());
    let fields = mv.coefficients.iter().map(|c| {
        let field = &c.field;
        if negate_grade(c.grade()) {
            quote! { #field: -self.#field }
        } else {
            quote! { #field: self.#field }
        }
    });
    quote! {
        impl<T: Ring> #op_trait for #name<T> {
            type Output = #name<T>;

            fn #op_fn(self) -> #name<T> {
                #name { #(#fields),* }
            }
        }
    }
}

fn gen_multivector(metric: &[isize], mv: &Multivector) -> TokenStream {
    let name = &mv.item.ident;
    let n = mv.coefficients.len();
    let fields: Vec<&Ident> = mv.coefficients.iter().map(|c| &c.field).collect();
    let grades: Vec<usize> = mv.coefficients.iter().map(|c| c.grade()).collect();
    let blade_names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    let table = multiplication_table(metric, &mv.coefficients);
    let dual = |i: usize| n - i - 1;

    let geometric = symbolic_product(n, |i, j| table[i][j]);
    let outer = symbolic_product(n, |i, j| {
        let (coef, k) = table[i][j];
        // Select grade r + s
        let coef = if grades[i] + grades[j] == grades[k] { coef } else { 0 };
        (coef, k)
    });
    let inner = symbolic_product(n, |i, j| {
        let (coef, k) = table[i][j];
        // Select grade |r - s|
        let coef = if grades[i] + grades[k] == grades[j] || grades[j] + grades[k] == grades[i] {
            coef
        } else {
            0
        };
        (coef, k)
    });
    let regressive = symbolic_product(n, |i, j| {
        let (coef, k) = table[dual(i)][dual(j)];
        let coef = if grades[dual(i)] + grades[dual(j)] == grades[k] { coef } else { 0 };
        (coef, dual(k))
    });

    let geometric_code = gen_binary_product(
        mv,
        &geometric,
        quote! { GeometricProduct },
        format_ident!("geometric_product"),
    );
    let outer_code = gen_binary_product(mv, &outer, quote! { OuterProduct }, format_ident!("outer_product"));
    let inner_code = gen_binary_product(mv, &inner, quote! { InnerProduct }, format_ident!("inner_product"));
    let regressive_code = gen_binary_product(
        mv,
        &regressive,
        quote! { RegressiveProduct },
        format_ident!("regressive_product"),
    );

    let mul_code = gen_operator_alias(mv, quote! { core::ops::Mul }, "mul", "geometric_product");
    let bitxor_code = gen_operator_alias(mv, quote! { core::ops::BitXor }, "bitxor", "outer_product");
    let bitor_code = gen_operator_alias(mv, quote! { core::ops::BitOr }, "bitor", "inner_product");
    let bitand_code = gen_operator_alias(mv, quote! { core::ops::BitAnd }, "bitand", "regressive_product");

    let reverse_code = gen_sign_operator(mv, quote! { Reverse }, "reverse", |k| (k * k.saturating_sub(1) / 2) % 2 == 1);
    let involute_code = gen_sign_operator(mv, quote! { Involute }, "involute", |k| k % 2 == 1);
    let conjugate_code = gen_sign_operator(mv, quote! { Conjugate }, "conjugate", |k| (k * (k + 1) / 2) % 2 == 1);

    let dual_fields = (0..n).map(|i| {
        let field = fields[i];
        let other = fields[dual(i)];
        quote! { #field: self.#other }
    });

    quote! {
        impl<T: Ring> #name<T> {
            /// Field names, in coefficient order
            pub const BLADES: [&'static str; #n] = [#(#blade_names),*];

            /// Grade of each coefficient, in coefficient order
            pub const GRADES: [usize; #n] = [#(#grades),*];

            pub fn zero() -> Self {
                #name { #(#fields: T::zero()),* }
            }

            pub fn coefficients(self) -> [T; #n] {
                [#(self.#fields),*]
            }

            pub fn from_coefficients(coefficients: [T; #n]) -> Self {
                let [#(#fields),*] = coefficients;
                #name { #(#fields),* }
            }

            /// Keep only the coefficients of the given grade
            pub fn grade(self, k: usize) -> Self {
                #name { #(#fields: if #grades == k { self.#fields } else { T::zero() }),* }
            }
        }

        #geometric_code
        #outer_code
        #inner_code
        #regressive_code
        #mul_code
        #bitxor_code
        #bitor_code
        #bitand_code
        #reverse_code
        #involute_code
        #conjugate_code

        impl<T: Ring> Dual for #name<T> {
            type Output = #name<T>;

            fn dual(self) -> #name<T> {
                #name { #(#dual_fields),* }
            }
        }

        impl<T: Ring> Sandwich<#name<T>> for #name<T> {
            type Output = #name<T>;

            fn sandwich(self, r: #name<T>) -> #name<T> {
                r.geometric_product(self).geometric_product(r.reverse())
            }
        }

        impl<T: Ring> core::ops::Add<#name<T>> for #name<T> {
            type Output = #name<T>;

            fn add(self, r: #name<T>) -> #name<T> {
                #name { #(#fields: self.#fields + r.#fields),* }
            }
        }

        impl<T: Ring> core::ops::Sub<#name<T>> for #name<T> {
            type Output = #name<T>;

            fn sub(self, r: #name<T>) -> #name<T> {
                #name { #(#fields: self.#fields - r.#fields),* }
            }
        }

        impl<T: Ring> core::ops::Neg for #name<T> {
            type Output = #name<T>;

            fn neg(self) -> #name<T> {
                #name { #(#fields: -self.#fields),* }
            }
        }

        impl<T: Ring> core::ops::Mul<T> for #name<T> {
            type Output = #name<T>;

            fn mul(self, r: T) -> #name<T> {
                #name { #(#fields: self.#fields * r),* }
            }
        }

        impl core::ops::Mul<#name<f32>> for f32 {
            type Output = #name<f32>;

            fn mul(self, r: #name<f32>) -> #name<f32> {
                r * self
            }
        }

        impl core::ops::Mul<#name<f64>> for f64 {
            type Output = #name<f64>;

            fn mul(self, r: #name<f64>) -> #name<f64> {
                r * self
            }
        }
    }
}

fn gen_algebra(input: AlgebraInput) -> Result<TokenStream> {
    let mut basis: Option<Vec<Ident>> = None;
    let mut metric: Option<Vec<isize>> = None;
    let mut passthrough = vec![];
    let mut multivector_items = vec![];

    for item in input.items {
        match item {
            Item::Macro(m) if m.mac.path.is_ident("basis") => {
                let idents = m
                    .mac
                    .parse_body_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
                basis = Some(idents.into_iter().collect());
            }
            Item::Macro(m) if m.mac.path.is_ident("metric") => {
                let entries = m
                    .mac
                    .parse_body_with(Punctuated::<MetricEntry, Token![,]>::parse_terminated)?;
                metric = Some(entries.into_iter().map(|e| e.0).collect());
            }
            Item::Struct(mut s) if s.attrs.iter().any(|a| a.path().is_ident("multivector")) => {
                s.attrs.retain(|a| !a.path().is_ident("multivector"));
                multivector_items.push(s);
            }
            other => passthrough.push(other),
        }
    }

    let basis = basis.ok_or_else(|| Error::new(Span::call_site(), "missing basis![] pseudo-macro"))?;
    let metric = metric.ok_or_else(|| Error::new(Span::call_site(), "missing metric![] pseudo-macro"))?;
    if metric.len() != basis.len() {
        return Err(Error::new(
            Span::call_site(),
            format!(
                "metric![] has {} entries but basis![] has {}",
                metric.len(),
                basis.len()
            ),
        ));
    }

    let (prefix, characters) = basis_characters(&basis)?;
    let multivectors = multivector_items
        .into_iter()
        .map(|item| resolve_multivector(item, basis.len(), &prefix, &characters))
        .collect::<Result<Vec<_>>>()?;

    let structs = multivectors.iter().map(|mv| &mv.item);
    let impls = multivectors.iter().map(|mv| gen_multivector(&metric, mv));

    Ok(quote! {
        #(#passthrough)*
        #(#structs)*
        #(#impls)*
    })
}

/// Generate dense closed-form products for a multivector struct.
///
/// The structure of the algebra is given by two pseudo-macros:
/// * `basis![e0, e1, e2]` names the basis vectors: a common prefix plus one character each.
/// * `metric![0, 1, 1]` gives the square of each basis vector, in the same order.
///
/// Each struct marked `#[multivector]` must have one field per basis blade.
/// A field named by the prefix followed by basis characters is the coefficient
/// on that blade in the spelled-out order (e.g. `e20` is e2 ∧ e0);
/// any other name is the scalar.
/// The field order is the coefficient order,
/// and reversing it must pair every blade with its complement,
/// since the generated `Dual` is that reversal.
///
/// The traits `Ring`, `GeometricProduct`, `OuterProduct`, `InnerProduct`,
/// `RegressiveProduct`, `Reverse`, `Involute`, `Conjugate`, `Dual` and `Sandwich`
/// must be in scope where the macro is invoked.
#[proc_macro]
pub fn geometric_algebra(input_tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input_tokens as AlgebraInput);
    gen_algebra(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
